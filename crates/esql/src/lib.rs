//! Entity SQL parse result contract for Rust
//!
//! This crate bundles the pieces downstream consumers need once a query has
//! been parsed and semantically resolved:
//! - The [`ParseResult`] binding the command tree to inline function definitions
//! - [`FunctionDefinition`] with its source span
//! - Error codes and diagnostics for invalid construction
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use esql::{ParseResultBuilder, Result};
//!
//! fn analyze(query: &str) -> Result<esql::ParseResult<String, String>> {
//!     let mut builder = ParseResultBuilder::new();
//!     builder
//!         .define_function("Twice", Arc::new("x * 2".to_string()), 0, 34)?
//!         .command_tree(Arc::new(query.to_string()))?;
//!     builder.build()
//! }
//!
//! let query = "FUNCTION Twice(x Int32) AS (x * 2) SELECT VALUE Twice(21) FROM {1}";
//! let result = analyze(query)?;
//! assert_eq!(result.function("twice").map(|f| f.start_position()), Some(0));
//! # Ok::<(), esql::EsqlError>(())
//! ```

// Re-export all public APIs from internal crates
pub use esql_diagnostics as diagnostics;
pub use esql_result as result;

// Convenience re-exports
pub use esql_diagnostics::{EsqlError, ErrorKind, Result, Span};
pub use esql_result::{FunctionDefinition, ParseResult, ParseResultBuilder, ValidationMode};
