use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache as MokaCache;
use uuid::Uuid;

use business::domain::product::idempotency::IdempotencyStore;

#[derive(Debug, Clone)]
pub struct IdempotencyConfig {
    /// How long a key keeps resolving to the product id it created.
    pub retention: Duration,
    pub max_capacity: u64,
}

impl Default for IdempotencyConfig {
    fn default() -> Self {
        Self {
            retention: Duration::from_secs(5 * 60),
            max_capacity: 100_000,
        }
    }
}

/// In-process idempotency store. A distributed deployment would swap this for
/// a shared store such as Redis behind the same port.
pub struct InMemoryIdempotencyStore {
    cache: MokaCache<String, Uuid>,
}

impl InMemoryIdempotencyStore {
    pub fn new() -> Self {
        Self::with_config(IdempotencyConfig::default())
    }

    pub fn with_config(config: IdempotencyConfig) -> Self {
        let cache = MokaCache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(config.retention)
            .build();

        Self { cache }
    }
}

impl Default for InMemoryIdempotencyStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdempotencyStore for InMemoryIdempotencyStore {
    async fn get(&self, key: &str) -> Option<Uuid> {
        self.cache.get(key).await
    }

    async fn store(&self, key: &str, product_id: Uuid) {
        self.cache.insert(key.to_string(), product_id).await;
    }
}
