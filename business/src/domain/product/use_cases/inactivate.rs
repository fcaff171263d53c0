use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;

pub struct InactivateProductParams {
    pub product_id: Uuid,
}

#[async_trait]
pub trait InactivateProductUseCase: Send + Sync {
    async fn execute(&self, params: InactivateProductParams) -> Result<(), ProductError>;
}
