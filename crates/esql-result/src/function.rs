//! Inline function definitions declared in query text

use crate::ValidationMode;
use esql_diagnostics::{
    ESQL0403, ESQL0404, ESQL0405, EsqlError, Result, SourceLocation, Span,
};
use serde::{Serialize, Serializer, ser::SerializeStruct};
use std::fmt;
use std::sync::Arc;

/// An inline function declared in Entity SQL query text
///
/// Holds the declared name, the resolved lambda (body and parameters) and the
/// `[start, end)` character span of the declaration in the query text.
#[derive(Debug, PartialEq, Eq)]
pub struct FunctionDefinition<L> {
    name: String,
    lambda: Arc<L>,
    span: Span,
}

impl<L> FunctionDefinition<L> {
    /// Create a function definition, rejecting reversed spans.
    ///
    /// Fails with an invalid-argument error when `name` is empty, when
    /// `lambda` is `None`, or when `start_position > end_position`.
    pub fn new(
        name: impl Into<String>,
        lambda: impl Into<Option<Arc<L>>>,
        start_position: usize,
        end_position: usize,
    ) -> Result<Self> {
        Self::with_mode(
            name,
            lambda,
            start_position,
            end_position,
            ValidationMode::Strict,
        )
    }

    /// Create a function definition, checking the span according to `mode`
    pub fn with_mode(
        name: impl Into<String>,
        lambda: impl Into<Option<Arc<L>>>,
        start_position: usize,
        end_position: usize,
        mode: ValidationMode,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            log::debug!("rejected function definition at {start_position}..{end_position}: empty name");
            return Err(EsqlError::invalid_argument(
                ESQL0403,
                "name",
                "function name cannot be empty",
            ));
        }

        let Some(lambda) = lambda.into() else {
            log::debug!("rejected function definition '{name}': missing lambda");
            return Err(EsqlError::invalid_argument(
                ESQL0404,
                "lambda",
                format!("function '{name}' has no lambda"),
            ));
        };

        let span = Span::new(start_position, end_position);
        if span.is_reversed() {
            if mode.rejects_reversed_spans() {
                log::debug!("rejected function definition '{name}': reversed span {span}");
                return Err(EsqlError::invalid_argument(
                    ESQL0405,
                    "end_position",
                    format!(
                        "function '{name}' ends at {end_position} before it starts at {start_position}"
                    ),
                ));
            }
            log::warn!("function definition '{name}' has reversed span {span}");
        }

        Ok(Self { name, lambda, span })
    }

    /// Declared function name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Function body and parameters
    pub fn lambda(&self) -> &Arc<L> {
        &self.lambda
    }

    /// Start position (inclusive) of the definition in the query text
    pub fn start_position(&self) -> usize {
        self.span.start
    }

    /// End position (exclusive) of the definition in the query text
    pub fn end_position(&self) -> usize {
        self.span.end
    }

    /// The `[start, end)` span of the definition
    pub fn span(&self) -> Span {
        self.span
    }

    /// The declaration's text, or `None` if the span does not fit `query_text`
    pub fn source_text<'q>(&self, query_text: &'q str) -> Option<&'q str> {
        self.span.slice(query_text)
    }

    /// Line and column of the declaration in `query_text`
    pub fn location(&self, query_text: &str) -> SourceLocation {
        SourceLocation::from_span(self.span, query_text)
    }
}

impl<L> Clone for FunctionDefinition<L> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            lambda: Arc::clone(&self.lambda),
            span: self.span,
        }
    }
}

impl<L> fmt::Display for FunctionDefinition<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.span)
    }
}

impl<L: Serialize> Serialize for FunctionDefinition<L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FunctionDefinition", 4)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("lambda", &self.lambda)?;
        state.serialize_field("startPosition", &self.span.start)?;
        state.serialize_field("endPosition", &self.span.end)?;
        state.end()
    }
}
