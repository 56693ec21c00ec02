//! Request middleware.

pub mod error;
