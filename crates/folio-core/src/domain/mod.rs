//! Domain entities - the core content objects.

mod author;
mod filters;
mod page;
mod post;

pub use author::Author;
pub use filters::{
    CalendarFilter, DEFAULT_PAGE, DEFAULT_PER_PAGE, MAX_PER_PAGE, PostFilters, ResolvedQuery,
    SortOrder,
};
pub use page::{PageContent, PageKind};
pub use post::{ArchiveDate, PaginatedPosts, Post, PostWithAuthor};
