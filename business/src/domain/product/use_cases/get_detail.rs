use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::views::ProductDetail;

pub struct GetProductDetailParams {
    pub product_id: Uuid,
}

#[async_trait]
pub trait GetProductDetailUseCase: Send + Sync {
    /// Absence is a regular outcome here, not an error.
    async fn execute(
        &self,
        params: GetProductDetailParams,
    ) -> Result<Option<ProductDetail>, ProductError>;
}
