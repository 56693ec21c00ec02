//! SeaORM entities for the content tables.

pub mod author;
pub mod page_content;
pub mod post;
