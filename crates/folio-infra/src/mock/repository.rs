//! In-memory content repository over a generated, immutable snapshot.

use std::collections::BTreeMap;

use async_trait::async_trait;

use folio_core::ContentError;
use folio_core::domain::{
    ArchiveDate, Author, PageContent, PageKind, PaginatedPosts, Post, PostFilters, PostWithAuthor,
};
use folio_core::ports::ContentRepository;
use folio_core::query;

use super::config::MockConfig;
use super::generator::{ensure_unique_slugs, generate_content, generate_pages};

/// Mock content store.
///
/// All data is built once at construction and never mutated afterwards, so
/// the store can be shared across tasks without locking.
/// Note: this store never produces `ContentError::BackingStore`.
#[derive(Debug, Clone)]
pub struct MockContentRepository {
    author: Author,
    posts: Vec<Post>,
    pages: BTreeMap<(PageKind, String), PageContent>,
}

impl MockContentRepository {
    /// Generate a store from the seeds in `config`.
    pub fn new(config: &MockConfig) -> Self {
        let content = generate_content(config);
        let pages = generate_pages(config);

        tracing::info!(
            seed = config.seed,
            page_seed = config.page_seed,
            posts = content.posts.len(),
            pages = pages.len(),
            "Mock content store generated"
        );

        Self::from_records(content.author, content.posts, pages)
    }

    /// Build a store from explicit records. Slugs are made unique first.
    pub fn from_records(author: Author, mut posts: Vec<Post>, pages: Vec<PageContent>) -> Self {
        ensure_unique_slugs(&mut posts);

        let pages = pages
            .into_iter()
            .map(|p| ((p.page, p.locale.to_lowercase()), p))
            .collect();

        Self {
            author,
            posts,
            pages,
        }
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    /// Posts in insertion order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn pages(&self) -> impl Iterator<Item = &PageContent> {
        self.pages.values()
    }

    fn join(&self, post: &Post) -> PostWithAuthor {
        if post.author_id != self.author.id {
            tracing::debug!(post_id = %post.id, "Post author differs from store author");
        }
        post.clone().with_author(self.author.clone())
    }
}

impl Default for MockContentRepository {
    fn default() -> Self {
        Self::new(&MockConfig::default())
    }
}

#[async_trait]
impl ContentRepository for MockContentRepository {
    async fn get_author(&self) -> Result<Author, ContentError> {
        Ok(self.author.clone())
    }

    async fn get_posts(&self, filters: &PostFilters) -> Result<PaginatedPosts, ContentError> {
        let resolved = filters.resolve()?;
        tracing::debug!(?resolved, "Querying mock posts");

        let page = query::run(&self.posts, &resolved);
        let posts = page.items.into_iter().map(|p| self.join(p)).collect();

        Ok(PaginatedPosts::new(
            posts,
            page.total,
            resolved.page,
            resolved.per_page,
        ))
    }

    async fn get_post_by_slug(&self, slug: &str) -> Result<Option<PostWithAuthor>, ContentError> {
        Ok(self
            .posts
            .iter()
            .find(|p| p.slug == slug)
            .map(|p| self.join(p)))
    }

    async fn get_recent_posts(&self, limit: usize) -> Result<Vec<PostWithAuthor>, ContentError> {
        Ok(query::recent(&self.posts, limit)
            .into_iter()
            .map(|p| self.join(p))
            .collect())
    }

    async fn get_available_dates(&self) -> Result<Vec<ArchiveDate>, ContentError> {
        Ok(query::available_dates(&self.posts))
    }

    async fn get_page_content(
        &self,
        page: PageKind,
        locale: &str,
    ) -> Result<PageContent, ContentError> {
        self.pages
            .get(&(page, locale.to_lowercase()))
            .cloned()
            .ok_or_else(|| ContentError::not_found("page content", format!("{page}/{locale}")))
    }
}
