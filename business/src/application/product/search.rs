use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::{ProductFilter, ProductRepository};
use crate::domain::product::use_cases::search::{ProductListQuery, SearchProductsUseCase};
use crate::domain::product::value_objects::ProductCondition;
use crate::domain::product::views::{PagedResult, ProductListItem};

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 50;

/// Search reads the repository directly; the detail cache is bypassed so list
/// results always reflect the latest committed state.
pub struct SearchProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchProductsUseCase for SearchProductsUseCaseImpl {
    async fn execute(
        &self,
        query: ProductListQuery,
    ) -> Result<PagedResult<ProductListItem>, ProductError> {
        let page = if query.page < 1 { 1 } else { query.page };
        let page_size = match query.page_size {
            0 => DEFAULT_PAGE_SIZE,
            size if size > MAX_PAGE_SIZE => MAX_PAGE_SIZE,
            size => size,
        };

        let filter = ProductFilter {
            term: query
                .term
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty()),
            brand: query
                .brand
                .map(|b| b.trim().to_string())
                .filter(|b| !b.is_empty()),
            // An unparseable condition filter is ignored, not rejected.
            condition: query
                .condition
                .as_deref()
                .and_then(|c| c.parse::<ProductCondition>().ok()),
        };

        self.logger.debug(&format!(
            "Searching products. page: {}, size: {}, term: {:?}, brand: {:?}",
            page, page_size, filter.term, filter.brand
        ));

        let (products, total) = self.repository.search(&filter, page, page_size).await?;

        let items = products.iter().map(ProductListItem::from).collect();

        Ok(PagedResult {
            items,
            page,
            page_size,
            total_items: total,
        })
    }
}
