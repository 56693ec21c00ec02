//! Data Transfer Objects - query-string types for the content API.

use serde::{Deserialize, Serialize};

/// Query string for `GET /api/posts`.
///
/// `month` is 0-indexed (January = 0) and requires `year`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsQuery {
    pub search: Option<String>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    /// `asc` or `desc` (default).
    pub sort: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// Query string for `GET /api/posts/recent`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecentQuery {
    /// Negative values are treated as zero.
    pub limit: Option<i64>,
}

impl RecentQuery {
    pub const DEFAULT_LIMIT: usize = 3;

    pub fn limit(&self) -> usize {
        match self.limit {
            Some(n) => usize::try_from(n.max(0)).unwrap_or(usize::MAX),
            None => Self::DEFAULT_LIMIT,
        }
    }
}
