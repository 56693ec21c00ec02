//! Seeded mock content store - used when no database is configured.

mod config;
mod generator;
mod lexicon;
mod repository;

pub use config::{
    DEFAULT_PAGE_SEED, DEFAULT_POST_COUNT, DEFAULT_SEED, DEFAULT_SPAN_DAYS, MockConfig,
};
pub use generator::{GeneratedContent, ensure_unique_slugs, generate_content, generate_pages};
pub use repository::MockContentRepository;
