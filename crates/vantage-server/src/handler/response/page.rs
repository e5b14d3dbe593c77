//! Offset-paginated response envelope.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use vantage_postgres::query::Pagination;

/// One page of results plus the totals needed to render pagination controls.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Current page number (1-based).
    pub page: i64,
    /// Number of records per page.
    pub page_size: i64,
    /// Total number of matching records.
    pub total: i64,
    /// Total number of pages for this page size.
    pub total_pages: i64,
    /// The records on this page.
    pub data: Vec<T>,
}

impl<T> Page<T> {
    /// Assembles a page from query results and the total match count.
    pub fn new(pagination: Pagination, total: i64, data: Vec<T>) -> Self {
        Self {
            page: pagination.page_number(),
            page_size: pagination.page_size(),
            total,
            total_pages: pagination.total_pages(total),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_math_matches_pagination() {
        let pagination = Pagination::from_page(2, 10);
        let page = Page::new(pagination, 25, vec!["a", "b"]);

        assert_eq!(page.page, 2);
        assert_eq!(page.page_size, 10);
        assert_eq!(page.total, 25);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.data.len(), 2);
    }
}
