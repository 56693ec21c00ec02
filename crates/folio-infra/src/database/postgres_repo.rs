//! PostgreSQL content repository.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ColumnTrait, Condition, DbConn, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select,
};
use uuid::Uuid;

use folio_core::ContentError;
use folio_core::domain::{
    ArchiveDate, Author, PageContent, PageKind, PaginatedPosts, Post, PostFilters,
    PostWithAuthor, SortOrder,
};
use folio_core::ports::ContentRepository;

use super::entity::author::{self, Entity as AuthorEntity};
use super::entity::page_content::{self, Entity as PageContentEntity};
use super::entity::post::{self, Entity as PostEntity};

/// Content repository backed by the `authors`, `posts` and `page_contents`
/// tables. Query semantics match the mock store.
pub struct PostgresContentRepository {
    db: DbConn,
}

impl PostgresContentRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    #[cfg(test)]
    pub(crate) fn into_connection(self) -> DbConn {
        self.db
    }

    /// Resolve authors for a batch of post rows, keeping row order.
    async fn join_authors(
        &self,
        rows: Vec<post::Model>,
    ) -> Result<Vec<PostWithAuthor>, ContentError> {
        let ids: BTreeSet<Uuid> = rows.iter().map(|r| r.author_id).collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let authors = AuthorEntity::find()
            .filter(author::Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(store_error)?
            .into_iter()
            .map(|m| Author::try_from(m).map(|a| (a.id, a)))
            .collect::<Result<HashMap<Uuid, Author>, _>>()?;

        rows.into_iter()
            .map(|row| {
                let post = Post::try_from(row)?;
                let author = authors.get(&post.author_id).cloned().ok_or_else(|| {
                    ContentError::BackingStore(format!(
                        "post {} references missing author {}",
                        post.id, post.author_id
                    ))
                })?;
                Ok(post.with_author(author))
            })
            .collect()
    }
}

fn store_error(err: DbErr) -> ContentError {
    tracing::error!(error = %err, "Content store query failed");
    ContentError::BackingStore(err.to_string())
}

/// Escape `LIKE` wildcards so the needle matches literally.
fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn ordered(select: Select<PostEntity>, order: SortOrder) -> Select<PostEntity> {
    let select = match order {
        SortOrder::Asc => select.order_by_asc(post::Column::PublishedAt),
        SortOrder::Desc => select.order_by_desc(post::Column::PublishedAt),
    };
    select.order_by_asc(post::Column::Seq)
}

#[async_trait]
impl ContentRepository for PostgresContentRepository {
    async fn get_author(&self) -> Result<Author, ContentError> {
        let model = AuthorEntity::find()
            .order_by_asc(author::Column::Id)
            .one(&self.db)
            .await
            .map_err(store_error)?
            .ok_or_else(|| ContentError::not_found("author", "site author"))?;

        Author::try_from(model)
    }

    async fn get_posts(&self, filters: &PostFilters) -> Result<PaginatedPosts, ContentError> {
        let resolved = filters.resolve()?;
        tracing::debug!(?resolved, "Querying posts");

        let mut select = PostEntity::find();

        if let Some(needle) = &resolved.search {
            let pattern = format!("%{}%", escape_like(needle));
            let title = Expr::expr(Func::lower(Expr::col(post::Column::Title)));
            let excerpt = Expr::expr(Func::lower(Expr::col(post::Column::Excerpt)));
            select = select.filter(
                Condition::any()
                    .add(title.like(pattern.clone()))
                    .add(excerpt.like(pattern)),
            );
        }

        if let Some(calendar) = &resolved.calendar {
            let (start, end) = calendar.range()?;
            select = select
                .filter(post::Column::PublishedAt.gte(start))
                .filter(post::Column::PublishedAt.lt(end));
        }

        let paginator =
            ordered(select, resolved.sort_order).paginate(&self.db, u64::from(resolved.per_page));
        let total = paginator.num_items().await.map_err(store_error)?;

        let rows = if u64::from(resolved.page) > total.div_ceil(u64::from(resolved.per_page)) {
            Vec::new()
        } else {
            paginator
                .fetch_page(u64::from(resolved.page - 1))
                .await
                .map_err(store_error)?
        };

        let posts = self.join_authors(rows).await?;
        Ok(PaginatedPosts::new(
            posts,
            total,
            resolved.page,
            resolved.per_page,
        ))
    }

    async fn get_post_by_slug(&self, slug: &str) -> Result<Option<PostWithAuthor>, ContentError> {
        let Some(row) = PostEntity::find()
            .filter(post::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(store_error)?
        else {
            return Ok(None);
        };

        Ok(self.join_authors(vec![row]).await?.pop())
    }

    async fn get_recent_posts(&self, limit: usize) -> Result<Vec<PostWithAuthor>, ContentError> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let rows = ordered(PostEntity::find(), SortOrder::Desc)
            .limit(limit as u64)
            .all(&self.db)
            .await
            .map_err(store_error)?;

        self.join_authors(rows).await
    }

    async fn get_available_dates(&self) -> Result<Vec<ArchiveDate>, ContentError> {
        let published: Vec<DateTimeWithTimeZone> = PostEntity::find()
            .select_only()
            .column(post::Column::PublishedAt)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(store_error)?;

        let dates: BTreeSet<ArchiveDate> = published
            .into_iter()
            .map(|dt| {
                let utc = dt.with_timezone(&Utc);
                ArchiveDate {
                    year: utc.year(),
                    month: utc.month0(),
                }
            })
            .collect();

        Ok(dates.into_iter().rev().collect())
    }

    async fn get_page_content(
        &self,
        page: PageKind,
        locale: &str,
    ) -> Result<PageContent, ContentError> {
        let model = PageContentEntity::find()
            .filter(page_content::Column::Page.eq(page.as_str()))
            .filter(page_content::Column::Locale.eq(locale.to_lowercase()))
            .one(&self.db)
            .await
            .map_err(store_error)?
            .ok_or_else(|| ContentError::not_found("page content", format!("{page}/{locale}")))?;

        PageContent::try_from(model)
    }
}
