use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::cache::ProductCache;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_detail::{
    GetProductDetailParams, GetProductDetailUseCase,
};
use crate::domain::product::views::ProductDetail;

/// Look-aside read path: cache first, repository on miss, cache population as
/// a side effect of the miss. Absence is never cached.
pub struct GetProductDetailUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub cache: Arc<dyn ProductCache>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductDetailUseCase for GetProductDetailUseCaseImpl {
    async fn execute(
        &self,
        params: GetProductDetailParams,
    ) -> Result<Option<ProductDetail>, ProductError> {
        if let Some(cached) = self.cache.get(params.product_id).await {
            self.logger
                .debug(&format!("Cache hit for product {}", params.product_id));
            return Ok(Some(cached));
        }

        self.logger.debug(&format!(
            "Cache miss for product {}. Fetching from repository",
            params.product_id
        ));

        let Some(product) = self.repository.get_by_id(params.product_id).await? else {
            return Ok(None);
        };

        let detail = ProductDetail::from(&product);
        self.cache.set(params.product_id, detail.clone()).await;

        Ok(Some(detail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{NewProductProps, Product};
    use crate::domain::product::repository::ProductFilter;
    use crate::domain::product::value_objects::{
        Money, ProductAttribute, ProductCondition, ProductPicture, Stock,
    };
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
            title: "Mechanical Keyboard".to_string(),
            brand: "Keychron".to_string(),
            model: "K8".to_string(),
            condition: ProductCondition::New,
            price: Money::new(BigDecimal::from(450), "BRL").unwrap(),
            stock: Stock::new(20).unwrap(),
            description: Some("Hot-swappable switches".to_string()),
            attributes: vec![ProductAttribute::new("Layout", "ABNT2")],
            pictures: vec![ProductPicture::new("https://cdn.example.com/k8.jpg")],
        })
    }

    #[tokio::test]
    async fn should_return_cached_detail_without_touching_repository() {
        let product_id = Uuid::new_v4();
        let cached = ProductDetail::from(&make_product(product_id));
        let expected = cached.clone();

        let mut mock_cache = MockCache::new();
        mock_cache
            .expect_get()
            .withf(move |id| *id == product_id)
            .returning(move |_| Some(cached.clone()));
        mock_cache.expect_set().never();

        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_by_id().never();

        let use_case = GetProductDetailUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: Arc::new(mock_cache),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductDetailParams { product_id })
            .await;

        assert_eq!(result.unwrap(), Some(expected));
    }

    #[tokio::test]
    async fn should_return_none_without_caching_absence() {
        let product_id = Uuid::new_v4();
        let mut mock_cache = MockCache::new();
        mock_cache.expect_get().returning(|_| None);
        mock_cache.expect_set().never();

        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));

        let use_case = GetProductDetailUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: Arc::new(mock_cache),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductDetailParams { product_id })
            .await;

        assert_eq!(result.unwrap(), None);
    }

    #[tokio::test]
    async fn should_fetch_project_and_cache_on_miss() {
        let product_id = Uuid::new_v4();
        let mut mock_cache = MockCache::new();
        mock_cache.expect_get().returning(|_| None);
        mock_cache
            .expect_set()
            .withf(move |id, detail| *id == product_id && detail.title == "Mechanical Keyboard")
            .times(1)
            .returning(|_, _| ());

        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .withf(move |id| *id == product_id)
            .returning(move |_| Ok(Some(make_product(product_id))));

        let use_case = GetProductDetailUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: Arc::new(mock_cache),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductDetailParams { product_id })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(result.id, product_id);
        assert_eq!(result.condition, "new");
        assert_eq!(result.available_quantity, 20);
        assert_eq!(result.pictures, vec!["https://cdn.example.com/k8.jpg"]);
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_cache = MockCache::new();
        mock_cache.expect_get().returning(|_| None);
        mock_cache.expect_set().never();

        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetProductDetailUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: Arc::new(mock_cache),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductDetailParams {
                product_id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }
}
