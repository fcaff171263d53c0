use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::cache::ProductCache;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::inactivate::{
    InactivateProductParams, InactivateProductUseCase,
};

pub struct InactivateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub cache: Arc<dyn ProductCache>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl InactivateProductUseCase for InactivateProductUseCaseImpl {
    async fn execute(&self, params: InactivateProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Inactivating product: {}", params.product_id));

        let mut product = self
            .repository
            .get_by_id_for_update(params.product_id)
            .await?
            .ok_or(ProductError::NotFound)?;

        product.inactivate();

        self.repository.save(&product).await?;
        self.cache.invalidate(product.id()).await;

        self.logger
            .info(&format!("Product inactivated: {}", product.id()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{NewProductProps, Product};
    use crate::domain::product::repository::ProductFilter;
    use crate::domain::product::value_objects::{Money, ProductCondition, Stock};
    use crate::domain::product::views::ProductDetail;
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError>;
            async fn get_by_id_for_update(&self, id: Uuid) -> Result<Option<Product>, RepositoryError>;
            async fn add(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn search(&self, filter: &ProductFilter, page: u32, page_size: u32) -> Result<(Vec<Product>, u64), RepositoryError>;
        }
    }

    mock! {
        pub Cache {}

        #[async_trait]
        impl ProductCache for Cache {
            async fn get(&self, product_id: Uuid) -> Option<ProductDetail>;
            async fn set(&self, product_id: Uuid, detail: ProductDetail);
            async fn invalidate(&self, product_id: Uuid);
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn make_product(id: Uuid) -> Product {
        Product::new(NewProductProps {
            id,
            title: "Espresso Machine".to_string(),
            brand: "Breville".to_string(),
            model: "BES870".to_string(),
            condition: ProductCondition::New,
            price: Money::new(BigDecimal::from(2500), "BRL").unwrap(),
            stock: Stock::new(4).unwrap(),
            description: None,
            attributes: Vec::new(),
            pictures: Vec::new(),
        })
    }

    fn make_inactive_product(id: Uuid) -> Product {
        let mut product = make_product(id);
        product.inactivate();
        product
    }

    #[tokio::test]
    async fn should_save_inactive_product_and_invalidate_cache() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id_for_update()
            .withf(move |id| *id == product_id)
            .returning(move |_| Ok(Some(make_product(product_id))));
        mock_repo
            .expect_save()
            .withf(|p| !p.is_active())
            .times(1)
            .returning(|_| Ok(()));

        let mut mock_cache = MockCache::new();
        mock_cache
            .expect_invalidate()
            .withf(move |id| *id == product_id)
            .times(1)
            .returning(|_| ());

        let use_case = InactivateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: Arc::new(mock_cache),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(InactivateProductParams { product_id })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_succeed_when_product_is_already_inactive() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id_for_update()
            .returning(move |_| Ok(Some(make_inactive_product(product_id))));
        mock_repo
            .expect_save()
            .withf(|p| !p.is_active())
            .times(1)
            .returning(|_| Ok(()));

        let mut mock_cache = MockCache::new();
        mock_cache.expect_invalidate().times(1).returning(|_| ());

        let use_case = InactivateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: Arc::new(mock_cache),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(InactivateProductParams { product_id })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_does_not_exist() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id_for_update()
            .returning(|_| Ok(None));
        mock_repo.expect_save().never();

        let mut mock_cache = MockCache::new();
        mock_cache.expect_invalidate().never();

        let use_case = InactivateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: Arc::new(mock_cache),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(InactivateProductParams {
                product_id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_not_invalidate_cache_when_save_fails() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id_for_update()
            .returning(move |_| Ok(Some(make_product(product_id))));
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let mut mock_cache = MockCache::new();
        mock_cache.expect_invalidate().never();

        let use_case = InactivateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: Arc::new(mock_cache),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(InactivateProductParams { product_id })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }
}
