use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Product;
use super::value_objects::ProductCondition;

/// Filters applied by [`ProductRepository::search`]. Missing fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Case-insensitive substring matched against title, brand or model.
    pub term: Option<String>,
    /// Exact brand match.
    pub brand: Option<String>,
    /// Exact condition match.
    pub condition: Option<ProductCondition>,
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Read-only lookup. Inactive products are not returned.
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError>;

    /// Lookup for a subsequent [`ProductRepository::save`]. Returns inactive
    /// products as well, so a repeated inactivation can find its target.
    async fn get_by_id_for_update(&self, id: Uuid) -> Result<Option<Product>, RepositoryError>;

    async fn add(&self, product: &Product) -> Result<(), RepositoryError>;

    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;

    /// Active products matching `filter`, ordered by rating average descending
    /// (a missing rating sorts as zero) and then title ascending. Returns the
    /// requested page and the total match count before pagination.
    async fn search(
        &self,
        filter: &ProductFilter,
        page: u32,
        page_size: u32,
    ) -> Result<(Vec<Product>, u64), RepositoryError>;
}
