//! Domain-level error types.

use thiserror::Error;

/// Content repository errors.
///
/// A missing post slug is not an error: slug lookups return `Ok(None)`.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// Opaque failure from an external store, propagated unchanged.
    #[error("Backing store failure: {0}")]
    BackingStore(String),
}

impl ContentError {
    pub fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            key: key.into(),
        }
    }

    pub fn invalid_filter(reason: impl Into<String>) -> Self {
        Self::InvalidFilter(reason.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
