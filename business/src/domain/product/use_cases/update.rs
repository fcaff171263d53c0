use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;

use super::create::AttributeParams;

/// Full-replace update. Every mutable field is overwritten; attribute and
/// picture lists are replaced wholesale, never merged.
pub struct UpdateProductParams {
    pub product_id: Uuid,
    pub title: String,
    pub brand: String,
    pub model: String,
    pub condition: String,
    pub price: BigDecimal,
    pub currency: String,
    pub stock: i32,
    pub description: Option<String>,
    pub attributes: Vec<AttributeParams>,
    pub pictures: Vec<String>,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<(), ProductError>;
}
