//! Pagination metadata

use serde::{Deserialize, Serialize};

/// Pagination metadata attached to list responses.
///
/// All fields are optional-tolerant; servers may omit any of them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-based)
    #[serde(default)]
    pub page: Option<u32>,

    /// Page size
    #[serde(default)]
    pub limit: Option<u32>,

    /// Total number of records across all pages
    #[serde(default)]
    pub total: Option<u64>,

    /// Total number of pages
    #[serde(default, alias = "totalPages")]
    pub total_pages: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerates_missing_fields() {
        let pagination: Pagination = serde_json::from_str(r#"{"page": 3}"#).unwrap();
        assert_eq!(pagination.page, Some(3));
        assert_eq!(pagination.total, None);
    }

    #[test]
    fn test_accepts_camel_case_total_pages() {
        let pagination: Pagination =
            serde_json::from_str(r#"{"totalPages": 9}"#).unwrap();
        assert_eq!(pagination.total_pages, Some(9));
    }
}
