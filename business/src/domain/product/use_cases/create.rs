use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;

pub struct AttributeParams {
    pub name: String,
    pub value: String,
}

pub struct CreateProductParams {
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
pub trait CreateProductUseCase: Send + Sync {
    /// Returns the id of the created product, or the previously created one
    /// when `idempotency_key` was already seen.
    async fn execute(
        &self,
        params: CreateProductParams,
        idempotency_key: &str,
    ) -> Result<Uuid, ProductError>;
}
