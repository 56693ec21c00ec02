//! In-memory query engine over a slice of posts.
//!
//! Filters run in a fixed order: text search, calendar, stable sort on
//! `published_at`, then pagination. `total` is taken after filtering and
//! before pagination.

use std::collections::BTreeSet;

use chrono::Datelike;

use crate::domain::{ArchiveDate, CalendarFilter, Post, ResolvedQuery, SortOrder};

/// One page of matches plus the size of the unpaginated match set.
#[derive(Debug)]
pub struct QueryPage<'a> {
    pub items: Vec<&'a Post>,
    pub total: u64,
}

/// Run a validated query against `posts`, which are in insertion order.
pub fn run<'a>(posts: &'a [Post], query: &ResolvedQuery) -> QueryPage<'a> {
    let mut matched: Vec<&Post> = posts
        .iter()
        .filter(|p| query.search.as_deref().is_none_or(|n| matches_search(p, n)))
        .filter(|p| query.calendar.as_ref().is_none_or(|c| matches_calendar(p, c)))
        .collect();

    sort_by_published(&mut matched, query.sort_order);

    let total = matched.len() as u64;
    let items = matched
        .into_iter()
        .skip(query.offset())
        .take(query.per_page as usize)
        .collect();

    QueryPage { items, total }
}

/// Case-insensitive substring match on title or excerpt.
/// `needle` must already be lowercased.
pub fn matches_search(post: &Post, needle: &str) -> bool {
    post.title.to_lowercase().contains(needle) || post.excerpt.to_lowercase().contains(needle)
}

pub fn matches_calendar(post: &Post, filter: &CalendarFilter) -> bool {
    if post.published_at.year() != filter.year {
        return false;
    }
    filter
        .month
        .is_none_or(|month| post.published_at.month0() == month)
}

/// Stable sort: posts published at the same instant keep their relative order.
pub fn sort_by_published(posts: &mut [&Post], order: SortOrder) {
    match order {
        SortOrder::Asc => posts.sort_by(|a, b| a.published_at.cmp(&b.published_at)),
        SortOrder::Desc => posts.sort_by(|a, b| b.published_at.cmp(&a.published_at)),
    }
}

/// The `limit` newest posts.
pub fn recent(posts: &[Post], limit: usize) -> Vec<&Post> {
    if limit == 0 {
        return Vec::new();
    }
    let mut all: Vec<&Post> = posts.iter().collect();
    sort_by_published(&mut all, SortOrder::Desc);
    all.truncate(limit);
    all
}

/// Distinct (year, month) pairs, sorted by year then month, both descending.
pub fn available_dates(posts: &[Post]) -> Vec<ArchiveDate> {
    let dates: BTreeSet<ArchiveDate> = posts.iter().map(Post::archive_date).collect();
    dates.into_iter().rev().collect()
}
