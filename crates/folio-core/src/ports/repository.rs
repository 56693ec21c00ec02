use async_trait::async_trait;

use crate::domain::{
    ArchiveDate, Author, PageContent, PageKind, PaginatedPosts, PostFilters, PostWithAuthor,
};
use crate::error::ContentError;

/// Read-only access to blog content.
///
/// Implementations return identically shaped results whatever the backing
/// store. They are built once by the composition root and shared behind an
/// `Arc<dyn ContentRepository>`.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// The deployment's single author.
    async fn get_author(&self) -> Result<Author, ContentError>;

    /// Search, calendar filter, stable sort on `published_at`, then paginate.
    async fn get_posts(&self, filters: &PostFilters) -> Result<PaginatedPosts, ContentError>;

    /// Look up a post by slug. Absence is `Ok(None)`.
    async fn get_post_by_slug(&self, slug: &str) -> Result<Option<PostWithAuthor>, ContentError>;

    /// The `limit` most recently published posts, newest first.
    async fn get_recent_posts(&self, limit: usize) -> Result<Vec<PostWithAuthor>, ContentError>;

    /// Distinct (year, month) pairs, newest first.
    async fn get_available_dates(&self) -> Result<Vec<ArchiveDate>, ContentError>;

    /// Localized copy for a static page.
    async fn get_page_content(
        &self,
        page: PageKind,
        locale: &str,
    ) -> Result<PageContent, ContentError>;
}
