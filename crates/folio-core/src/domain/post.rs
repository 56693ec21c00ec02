use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Author;

/// Post entity - a published blog article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    /// URL-safe identifier derived from the title. Unique within a store.
    pub slug: String,
    pub excerpt: String,
    /// Markdown body.
    pub content: String,
    pub cover_image: String,
    pub published_at: DateTime<Utc>,
    pub author_id: Uuid,
    pub tags: Vec<String>,
}

impl Post {
    /// Calendar bucket of the publication date, month 0-indexed.
    pub fn archive_date(&self) -> ArchiveDate {
        ArchiveDate {
            year: self.published_at.year(),
            month: self.published_at.month0(),
        }
    }

    pub fn with_author(self, author: Author) -> PostWithAuthor {
        PostWithAuthor { post: self, author }
    }
}

/// Read-only join view of a post and its resolved author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostWithAuthor {
    #[serde(flatten)]
    pub post: Post,
    pub author: Author,
}

/// Query result envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedPosts {
    pub posts: Vec<PostWithAuthor>,
    /// Number of matching posts before pagination.
    pub total: u64,
    /// 1-based page number that was requested.
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u64,
}

impl PaginatedPosts {
    pub fn new(posts: Vec<PostWithAuthor>, total: u64, page: u32, per_page: u32) -> Self {
        Self {
            posts,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        }
    }
}

/// Ceiling of `total / per_page`; zero when nothing matched.
pub(crate) fn total_pages(total: u64, per_page: u32) -> u64 {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(u64::from(per_page))
}

/// A (year, month) pair with at least one post. Month is 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArchiveDate {
    pub year: i32,
    pub month: u32,
}
