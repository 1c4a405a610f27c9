use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Envelope used by the administrative API and by every error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub meta: Option<Meta>,
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Meta {
    pub total: i64,
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>, meta: Option<Meta>) -> Self {
        Self {
            success: true,
            data,
            message,
            meta,
            errors: None,
        }
    }

    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            meta: None,
            errors,
        }
    }
}

/// Public list payload: `{count, results}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListResponse<T> {
    pub count: usize,
    pub results: Vec<T>,
}

impl<T> From<Vec<T>> for ListResponse<T> {
    fn from(results: Vec<T>) -> Self {
        Self {
            count: results.len(),
            results,
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Standard pagination query parameters for administrative list endpoints.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PaginationQuery {
    /// Page number (1-indexed, default: 1)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,

    /// Number of items per page (default: 20, max: 100)
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: i64,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationQuery {
    /// Build from optional query values, falling back to the defaults
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or_else(default_page),
            page_size: page_size.unwrap_or_else(default_page_size),
        }
    }

    /// Calculate SQL OFFSET from page number
    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1) * self.limit()
    }

    /// Get clamped page_size (respects MAX_PAGE_SIZE)
    pub fn limit(&self) -> i64 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_offset_and_limit() {
        let page = PaginationQuery {
            page: 3,
            page_size: 25,
        };
        assert_eq!(page.limit(), 25);
        assert_eq!(page.offset(), 50);

        let clamped = PaginationQuery {
            page: 0,
            page_size: 1000,
        };
        assert_eq!(clamped.limit(), MAX_PAGE_SIZE);
        assert_eq!(clamped.offset(), 0);
    }

    #[test]
    fn test_pagination_new_defaults() {
        let page = PaginationQuery::new(None, None);
        assert_eq!(page.page, 1);
        assert_eq!(page.limit(), DEFAULT_PAGE_SIZE);
        assert_eq!(PaginationQuery::new(Some(4), Some(5)).offset(), 15);
    }

    #[test]
    fn test_list_response_counts_results() {
        let list: ListResponse<u8> = vec![1, 2, 3].into();
        assert_eq!(list.count, 3);
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["count"], 3);
        assert_eq!(json["results"], serde_json::json!([1, 2, 3]));
    }
}
