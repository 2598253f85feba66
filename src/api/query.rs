//! Query parameter structs for pagination

use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Hard cap on page size
pub const MAX_LIMIT: usize = 100;

/// Helper to deserialize numbers from query string (which are always strings)
fn deserialize_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: std::fmt::Display,
{
    use serde::de::Error;
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.is_empty() => s.parse().map_err(D::Error::custom),
        _ => Ok(T::default()),
    }
}

/// Like [`deserialize_from_str`] but keeps an absent or empty value as `None`
fn deserialize_option_from_str<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    use serde::de::Error;
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.is_empty() => s.parse().map(Some).map_err(D::Error::custom),
        _ => Ok(None),
    }
}

/// `?limit=` falls back to the default page size rather than zero
fn deserialize_limit<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_option_from_str(deserializer)?.unwrap_or_else(default_limit))
}

/// Pagination parameters for list endpoints
#[derive(Debug, Deserialize, Clone)]
pub struct PaginationParams {
    /// Max items to return (default: 50, max: 100)
    #[serde(default = "default_limit", deserialize_with = "deserialize_limit")]
    pub limit: usize,
    /// Items to skip (default: 0)
    #[serde(default, deserialize_with = "deserialize_from_str")]
    pub offset: usize,
}

fn default_limit() -> usize {
    50
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            offset: 0,
        }
    }
}

impl PaginationParams {
    /// Validate pagination parameters
    pub fn validate(&self) -> Result<(), String> {
        if self.limit > MAX_LIMIT {
            return Err(format!("limit cannot exceed {}", MAX_LIMIT));
        }
        Ok(())
    }

    /// Get validated limit (capped at 100)
    pub fn validated_limit(&self) -> usize {
        self.limit.min(MAX_LIMIT)
    }

    /// Slice one page out of a fully loaded list
    pub fn paginate<T>(&self, items: Vec<T>) -> PaginatedResponse<T> {
        let total = items.len();
        let limit = self.validated_limit();
        let page = items.into_iter().skip(self.offset).take(limit).collect();
        PaginatedResponse::new(page, total, limit, self.offset)
    }
}

/// Paginated list response
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    /// Items in the current page
    pub items: Vec<T>,
    /// Total count of items
    pub total: usize,
    /// Maximum items per page (as requested)
    pub limit: usize,
    /// Number of items skipped
    pub offset: usize,
    /// Whether there are more items after this page
    pub has_more: bool,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response
    pub fn new(items: Vec<T>, total: usize, limit: usize, offset: usize) -> Self {
        Self {
            has_more: offset + items.len() < total,
            items,
            total,
            limit,
            offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults() {
        let params = PaginationParams::default();
        assert_eq!(params.limit, 50);
        assert_eq!(params.offset, 0);
    }

    #[test]
    fn test_pagination_validation_limit_too_high() {
        let params = PaginationParams {
            limit: 101,
            offset: 0,
        };
        assert!(params.validate().is_err());
        assert_eq!(params.validated_limit(), 100);
    }

    #[test]
    fn test_pagination_from_query_string() {
        let params: PaginationParams = serde_json::from_str(r#"{"limit":"10","offset":"5"}"#)
            .expect("string numbers should parse");
        assert_eq!(params.limit, 10);
        assert_eq!(params.offset, 5);

        let params: PaginationParams = serde_json::from_str(r#"{"offset":""}"#).unwrap();
        assert_eq!(params.limit, 50);
        assert_eq!(params.offset, 0);
    }

    #[test]
    fn test_empty_limit_uses_default() {
        let params: PaginationParams =
            serde_json::from_str(r#"{"limit":"","offset":"2"}"#).unwrap();
        assert_eq!(params.limit, 50);
        assert_eq!(params.offset, 2);

        assert!(serde_json::from_str::<PaginationParams>(r#"{"limit":"abc"}"#).is_err());
    }

    #[test]
    fn test_paginate_slices_and_flags_more() {
        let params = PaginationParams {
            limit: 2,
            offset: 1,
        };
        let page = params.paginate(vec![1, 2, 3, 4]);
        assert_eq!(page.items, vec![2, 3]);
        assert_eq!(page.total, 4);
        assert!(page.has_more);

        let last = PaginationParams {
            limit: 2,
            offset: 3,
        }
        .paginate(vec![1, 2, 3, 4]);
        assert_eq!(last.items, vec![4]);
        assert!(!last.has_more);
    }
}
