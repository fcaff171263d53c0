use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::views::{PagedResult, ProductListItem};

pub struct ProductListQuery {
    /// Free-text term matched against title, brand or model.
    pub term: Option<String>,
    /// Exact brand filter.
    pub brand: Option<String>,
    /// Condition filter; an unparseable value is ignored rather than rejected.
    pub condition: Option<String>,
    /// 1-based page number.
    pub page: u32,
    pub page_size: u32,
}

#[async_trait]
pub trait SearchProductsUseCase: Send + Sync {
    async fn execute(
        &self,
        query: ProductListQuery,
    ) -> Result<PagedResult<ProductListItem>, ProductError>;
}
