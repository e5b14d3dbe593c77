//! Pagination query parameters.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;
use vantage_postgres::query::Pagination;

/// Page-based pagination parameters accepted in query strings.
#[must_use]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PaginationParams {
    /// Page number, starting at 1.
    #[validate(range(min = 1))]
    pub page: i64,
    /// Number of records per page (1 to 100).
    #[validate(range(min = 1, max = 100))]
    pub page_size: i64,
}

impl PaginationParams {
    /// Converts the request parameters into query pagination.
    pub fn into_pagination(self) -> Pagination {
        Pagination::from_page(self.page, self.page_size)
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page() {
        let params = PaginationParams::default();
        let pagination = params.into_pagination();
        assert_eq!(pagination.offset, 0);
        assert_eq!(pagination.limit, 20);
    }

    #[test]
    fn later_pages_offset_by_page_size() {
        let params = PaginationParams { page: 4, page_size: 25 };
        let pagination = params.into_pagination();
        assert_eq!(pagination.offset, 75);
        assert_eq!(pagination.limit, 25);
    }
}
