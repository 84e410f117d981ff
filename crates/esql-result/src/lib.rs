//! Entity SQL parse result model
//!
//! The immutable structure handed out after query text has been parsed and
//! semantically resolved: the command tree of the whole query plus the inline
//! functions declared in the text, in declaration order.
//!
//! The command tree `T` and lambda body `L` are opaque here. They are held
//! behind [`Arc`](std::sync::Arc) and handed back by reference, never cloned
//! or inspected.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use esql_result::{FunctionDefinition, ParseResult};
//!
//! let tree = Arc::new("SELECT VALUE Foo(1) FROM {1}");
//! let foo = FunctionDefinition::new("Foo", Arc::new("x + 1"), 0, 31)?;
//!
//! let result = ParseResult::new(tree.clone(), &[foo][..])?;
//! assert!(Arc::ptr_eq(result.command_tree(), &tree));
//! assert_eq!(result.function_definitions()[0].name(), "Foo");
//! # Ok::<(), esql_diagnostics::EsqlError>(())
//! ```

mod builder;
mod function;
mod mode;
mod result;

pub use builder::ParseResultBuilder;
pub use function::FunctionDefinition;
pub use mode::ValidationMode;
pub use result::ParseResult;
