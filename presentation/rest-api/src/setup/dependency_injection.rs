use std::sync::Arc;

use cache::detail_cache::MokaProductCache;
use cache::idempotency::InMemoryIdempotencyStore;
use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::get_detail::GetProductDetailUseCaseImpl;
use business::application::product::inactivate::InactivateProductUseCaseImpl;
use business::application::product::search::SearchProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::product::cache::ProductCache;
use business::domain::product::repository::ProductRepository;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters. The cache and idempotency store are
        // long-lived shared state with their own internal synchronization.
        let product_repository: Arc<dyn ProductRepository> =
            Arc::new(ProductRepositoryPostgres::new(pool));
        let product_cache: Arc<dyn ProductCache> = Arc::new(MokaProductCache::new());
        let idempotency_store = Arc::new(InMemoryIdempotencyStore::new());

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            idempotency: idempotency_store,
            logger: logger.clone(),
        });
        let get_detail_use_case = Arc::new(GetProductDetailUseCaseImpl {
            repository: product_repository.clone(),
            cache: product_cache.clone(),
            logger: logger.clone(),
        });
        let search_use_case = Arc::new(SearchProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            cache: product_cache.clone(),
            logger: logger.clone(),
        });
        let inactivate_use_case = Arc::new(InactivateProductUseCaseImpl {
            repository: product_repository,
            cache: product_cache,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            create_use_case,
            get_detail_use_case,
            search_use_case,
            update_use_case,
            inactivate_use_case,
        );

        Self {
            health_api,
            product_api,
        }
    }
}
