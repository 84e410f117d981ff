//! Entity SQL diagnostics and error handling
//!
//! This crate provides the error infrastructure shared by the Entity SQL crates:
//! structured error codes, character-offset source spans, and diagnostic reporting.

mod error;
mod error_code;
mod span;

pub use error::*;
pub use error_code::*;
pub use span::*;

/// Result type for Entity SQL operations
pub type Result<T> = std::result::Result<T, EsqlError>;
