use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::idempotency::IdempotencyStore;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::product::value_objects::{
    Money, ProductAttribute, ProductCondition, ProductPicture, Stock,
};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub idempotency: Arc<dyn IdempotencyStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(
        &self,
        params: CreateProductParams,
        idempotency_key: &str,
    ) -> Result<Uuid, ProductError> {
        if let Some(existing) = self.idempotency.get(idempotency_key).await {
            self.logger.info(&format!(
                "Idempotency hit for key {}. Returning existing product {}",
                idempotency_key, existing
            ));
            return Ok(existing);
        }

        self.logger.info(&format!(
            "Creating product {} with title '{}'",
            params.product_id, params.title
        ));

        let condition = params
            .condition
            .parse::<ProductCondition>()
            .map_err(|_| ProductError::InvalidCondition)?;

        let product = Product::new(NewProductProps {
            id: params.product_id,
            title: params.title,
            brand: params.brand,
            model: params.model,
            condition,
            price: Money::new(params.price, params.currency)?,
            stock: Stock::new(params.stock)?,
            description: params.description,
            attributes: params
                .attributes
                .into_iter()
                .map(|a| ProductAttribute::new(a.name, a.value))
                .collect(),
            pictures: params.pictures.into_iter().map(ProductPicture::new).collect(),
        });

        self.repository.add(&product).await?;
        // The key is registered only after the insert lands; two concurrent
        // requests with the same key can still both pass the lookup above.
        self.idempotency.store(idempotency_key, product.id()).await;

        self.logger
            .info(&format!("Product {} created", product.id()));
        Ok(product.id())
    }
}
