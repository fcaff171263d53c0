use async_trait::async_trait;
use uuid::Uuid;

/// Maps client-supplied idempotency keys to the product id they created.
///
/// Entries are retained for a bounded window; within that window a key always
/// resolves to the same product id.
#[async_trait]
pub trait IdempotencyStore: Send + Sync {
    async fn get(&self, key: &str) -> Option<Uuid>;
    async fn store(&self, key: &str, product_id: Uuid);
}
