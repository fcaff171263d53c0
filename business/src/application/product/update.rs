use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::cache::ProductCache;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductUpdate;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::product::value_objects::{
    Money, ProductAttribute, ProductCondition, ProductPicture, Stock,
};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub cache: Arc<dyn ProductCache>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.product_id));

        let mut product = self
            .repository
            .get_by_id_for_update(params.product_id)
            .await?
            .ok_or(ProductError::NotFound)?;

        let condition = params
            .condition
            .parse::<ProductCondition>()
            .map_err(|_| ProductError::InvalidCondition)?;

        product.update(ProductUpdate {
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

        self.repository.save(&product).await?;
        // Evict only once the write has committed; a failed save must leave
        // the cached copy untouched.
        self.cache.invalidate(product.id()).await;

        self.logger
            .info(&format!("Product updated: {}", product.id()));
        Ok(())
    }
}
