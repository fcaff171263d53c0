use async_trait::async_trait;
use uuid::Uuid;

use super::views::ProductDetail;

/// Look-aside cache for product detail views.
///
/// Entries are only ever populated as a side effect of a detail-lookup miss;
/// writes invalidate, they never populate.
#[async_trait]
pub trait ProductCache: Send + Sync {
    async fn get(&self, product_id: Uuid) -> Option<ProductDetail>;
    async fn set(&self, product_id: Uuid, detail: ProductDetail);
    async fn invalidate(&self, product_id: Uuid);
}
