//! The result of parsing an Entity SQL query

use crate::FunctionDefinition;
use esql_diagnostics::{ESQL0401, ESQL0402, ESQL0406, EsqlError, Result, char_len};
use serde::{Serialize, Serializer, ser::SerializeStruct};
use std::fmt;
use std::sync::Arc;

/// Entity SQL parser result information
///
/// Binds the command tree produced during parsing to the inline function
/// definitions declared in the query text. Both are fixed at construction.
/// Definitions are kept in declaration order.
pub struct ParseResult<T, L> {
    command_tree: Arc<T>,
    function_definitions: Arc<[FunctionDefinition<L>]>,
}

impl<T, L> ParseResult<T, L> {
    /// Create a parse result.
    ///
    /// The definitions are copied, so the caller's sequence may change
    /// afterwards without affecting the result. An empty sequence is valid;
    /// a missing tree or a missing sequence is an invalid argument.
    pub fn new<'a>(
        command_tree: impl Into<Option<Arc<T>>>,
        function_definitions: impl Into<Option<&'a [FunctionDefinition<L>]>>,
    ) -> Result<Self>
    where
        L: 'a,
    {
        let Some(command_tree) = command_tree.into() else {
            log::debug!("rejected parse result: missing command tree");
            return Err(missing_command_tree());
        };
        let Some(function_definitions) = function_definitions.into() else {
            log::debug!("rejected parse result: missing function definitions");
            return Err(EsqlError::invalid_argument(
                ESQL0402,
                "function_definitions",
                "function definition sequence is missing",
            ));
        };

        Ok(Self::from_parts(command_tree, function_definitions.into()))
    }

    pub(crate) fn from_parts(
        command_tree: Arc<T>,
        function_definitions: Arc<[FunctionDefinition<L>]>,
    ) -> Self {
        log::trace!(
            "parse result created with {} inline function(s)",
            function_definitions.len()
        );
        Self {
            command_tree,
            function_definitions,
        }
    }

    /// A command tree produced during parsing
    pub fn command_tree(&self) -> &Arc<T> {
        &self.command_tree
    }

    /// Inline function definitions, in the order they were declared
    pub fn function_definitions(&self) -> &[FunctionDefinition<L>] {
        &self.function_definitions
    }

    /// Number of inline function definitions
    pub fn len(&self) -> usize {
        self.function_definitions.len()
    }

    /// Whether the query declares no inline functions
    pub fn is_empty(&self) -> bool {
        self.function_definitions.is_empty()
    }

    /// Iterate over definitions in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, FunctionDefinition<L>> {
        self.function_definitions.iter()
    }

    /// First definition named `name`, compared case-insensitively
    pub fn function(&self, name: &str) -> Option<&FunctionDefinition<L>> {
        let name = name.to_lowercase();
        self.iter().find(|def| {
            def.name()
                .chars()
                .flat_map(char::to_lowercase)
                .eq(name.chars())
        })
    }

    /// First definition whose span contains the character `offset`
    pub fn function_at(&self, offset: usize) -> Option<&FunctionDefinition<L>> {
        self.iter().find(|def| def.span().contains_pos(offset))
    }

    /// Check that both ends of every definition's span lie within `query_text`
    pub fn check_spans(&self, query_text: &str) -> Result<()> {
        let len = char_len(query_text);
        let past_end = self
            .iter()
            .find(|def| def.start_position().max(def.end_position()) > len);
        match past_end {
            Some(def) => {
                log::debug!("function '{}' span {} exceeds query length {len}", def.name(), def.span());
                Err(EsqlError::invalid_argument(
                    ESQL0406,
                    "function_definitions",
                    format!(
                        "function '{}' spans {} but the query has {len} characters",
                        def.name(),
                        def.span()
                    ),
                ))
            }
            None => Ok(()),
        }
    }
}

pub(crate) fn missing_command_tree() -> EsqlError {
    EsqlError::invalid_argument(ESQL0401, "command_tree", "command tree is missing")
}

impl<T, L> Clone for ParseResult<T, L> {
    fn clone(&self) -> Self {
        Self {
            command_tree: Arc::clone(&self.command_tree),
            function_definitions: Arc::clone(&self.function_definitions),
        }
    }
}

impl<T: fmt::Debug, L: fmt::Debug> fmt::Debug for ParseResult<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseResult")
            .field("command_tree", &self.command_tree)
            .field("function_definitions", &self.function_definitions)
            .finish()
    }
}

impl<'r, T, L> IntoIterator for &'r ParseResult<T, L> {
    type Item = &'r FunctionDefinition<L>;
    type IntoIter = std::slice::Iter<'r, FunctionDefinition<L>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Serialize, L: Serialize> Serialize for ParseResult<T, L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ParseResult", 2)?;
        state.serialize_field("commandTree", &self.command_tree)?;
        state.serialize_field("functionDefinitions", &*self.function_definitions)?;
        state.end()
    }
}
