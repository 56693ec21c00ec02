//! # Folio Core
//!
//! The domain layer of the Folio blog backend.
//! This crate contains the content model, the repository contract and the
//! in-memory query engine, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod query;

pub use error::ContentError;
