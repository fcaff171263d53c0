use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache as MokaCache;
use uuid::Uuid;

use business::domain::product::cache::ProductCache;
use business::domain::product::views::ProductDetail;

/// Expiration policy for cached product details.
#[derive(Debug, Clone)]
pub struct DetailCacheConfig {
    /// Absolute lifetime of an entry.
    pub time_to_live: Duration,
    /// Sliding window: an entry not read for this long is evicted early.
    pub time_to_idle: Duration,
    pub max_capacity: u64,
}

impl Default for DetailCacheConfig {
    fn default() -> Self {
        Self {
            time_to_live: Duration::from_secs(60),
            time_to_idle: Duration::from_secs(20),
            max_capacity: 10_000,
        }
    }
}

/// In-process detail cache backed by moka. An entry expires at whichever of
/// the absolute and sliding limits is hit first.
pub struct MokaProductCache {
    cache: MokaCache<Uuid, ProductDetail>,
}

impl MokaProductCache {
    pub fn new() -> Self {
        Self::with_config(DetailCacheConfig::default())
    }

    pub fn with_config(config: DetailCacheConfig) -> Self {
        let cache = MokaCache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(config.time_to_live)
            .time_to_idle(config.time_to_idle)
            .build();

        Self { cache }
    }
}

impl Default for MokaProductCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductCache for MokaProductCache {
    async fn get(&self, product_id: Uuid) -> Option<ProductDetail> {
        self.cache.get(&product_id).await
    }

    async fn set(&self, product_id: Uuid, detail: ProductDetail) {
        self.cache.insert(product_id, detail).await;
    }

    async fn invalidate(&self, product_id: Uuid) {
        self.cache.invalidate(&product_id).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    fn make_detail(id: Uuid) -> ProductDetail {
        ProductDetail {
            id,
            title: "Robot Vacuum".to_string(),
            brand: "Roborock".to_string(),
            model: "S8".to_string(),
            condition: "new".to_string(),
            price: BigDecimal::from(3200),
            currency: "BRL".to_string(),
            installments: None,
            available_quantity: 6,
            pictures: vec!["https://cdn.example.com/s8.jpg".to_string()],
            highlights: Vec::new(),
            attributes: Vec::new(),
            shipping: None,
            returns: None,
            purchase_protection: false,
            rating: None,
            description: None,
        }
    }

    fn short_lived(ttl_ms: u64, tti_ms: u64) -> MokaProductCache {
        MokaProductCache::with_config(DetailCacheConfig {
            time_to_live: Duration::from_millis(ttl_ms),
            time_to_idle: Duration::from_millis(tti_ms),
            max_capacity: 100,
        })
    }

    #[tokio::test]
    async fn should_return_stored_detail() {
        let cache = MokaProductCache::new();
        let id = Uuid::new_v4();

        cache.set(id, make_detail(id)).await;

        let found = cache.get(id).await;
        assert_eq!(found.map(|d| d.title), Some("Robot Vacuum".to_string()));
    }

    #[tokio::test]
    async fn should_return_none_for_unknown_id() {
        let cache = MokaProductCache::new();

        assert!(cache.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn should_remove_entry_on_invalidate() {
        let cache = MokaProductCache::new();
        let id = Uuid::new_v4();

        cache.set(id, make_detail(id)).await;
        cache.invalidate(id).await;

        assert!(cache.get(id).await.is_none());
    }

    #[tokio::test]
    async fn should_expire_entry_after_absolute_ttl() {
        let cache = short_lived(50, 5_000);
        let id = Uuid::new_v4();

        cache.set(id, make_detail(id)).await;
        tokio::time::sleep(Duration::from_millis(120)).await;

        assert!(cache.get(id).await.is_none());
    }

    #[tokio::test]
    async fn should_expire_idle_entry_before_absolute_ttl() {
        let cache = short_lived(5_000, 100);
        let id = Uuid::new_v4();

        cache.set(id, make_detail(id)).await;
        tokio::time::sleep(Duration::from_millis(250)).await;

        assert!(cache.get(id).await.is_none());
    }

    #[tokio::test]
    async fn should_keep_entry_alive_while_it_is_being_read() {
        let cache = short_lived(2_000, 300);
        let id = Uuid::new_v4();

        cache.set(id, make_detail(id)).await;
        // Each read resets the idle window.
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(cache.get(id).await.is_some());
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(cache.get(id).await.is_some());
    }
}
