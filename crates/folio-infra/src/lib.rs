//! # Folio Infrastructure
//!
//! Concrete implementations of the `ContentRepository` port defined in
//! `folio-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, mock store only
//! - `postgres` - PostgreSQL content store via SeaORM

pub mod database;
pub mod mock;

// Re-exports - In-Memory
pub use mock::{MockConfig, MockContentRepository};

// Re-exports - PostgreSQL
#[cfg(feature = "postgres")]
pub use database::{DatabaseConfig, DatabaseConnections, PostgresContentRepository};
