//! Incremental construction of a [`ParseResult`] during a single parse pass

use crate::result::missing_command_tree;
use crate::{FunctionDefinition, ParseResult, ValidationMode};
use esql_diagnostics::{ESQL0407, EsqlError, Result};
use std::sync::Arc;

/// Collects the outputs of semantic analysis and seals them into a [`ParseResult`].
///
/// Function definitions keep the order in which they are added, which must be
/// their declaration order in the query text.
#[derive(Debug)]
pub struct ParseResultBuilder<T, L> {
    mode: ValidationMode,
    command_tree: Option<Arc<T>>,
    function_definitions: Vec<FunctionDefinition<L>>,
}

impl<T, L> Default for ParseResultBuilder<T, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, L> ParseResultBuilder<T, L> {
    /// Create an empty builder using [`ValidationMode::Strict`]
    pub fn new() -> Self {
        Self {
            mode: ValidationMode::default(),
            command_tree: None,
            function_definitions: Vec::new(),
        }
    }

    /// Set the validation mode applied by [`define_function`](Self::define_function)
    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    /// The validation mode in effect
    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Set the command tree.
    ///
    /// A parse pass yields one tree, so a second call fails with an
    /// invalid-argument error and keeps the tree set first.
    pub fn command_tree(&mut self, command_tree: Arc<T>) -> Result<&mut Self> {
        if self.command_tree.is_some() {
            log::debug!("rejected second command tree for the same parse pass");
            return Err(EsqlError::invalid_argument(
                ESQL0407,
                "command_tree",
                "command tree was already set",
            ));
        }
        self.command_tree = Some(command_tree);
        Ok(self)
    }

    /// Validate and append a function definition
    pub fn define_function(
        &mut self,
        name: impl Into<String>,
        lambda: impl Into<Option<Arc<L>>>,
        start_position: usize,
        end_position: usize,
    ) -> Result<&mut Self> {
        let definition =
            FunctionDefinition::with_mode(name, lambda, start_position, end_position, self.mode)?;
        self.function_definitions.push(definition);
        Ok(self)
    }

    /// Append an already constructed function definition
    pub fn push(&mut self, definition: FunctionDefinition<L>) -> &mut Self {
        self.function_definitions.push(definition);
        self
    }

    /// Seal the collected values into a parse result
    pub fn build(self) -> Result<ParseResult<T, L>> {
        let Some(command_tree) = self.command_tree else {
            log::debug!(
                "rejected parse result: missing command tree ({} function(s) collected)",
                self.function_definitions.len()
            );
            return Err(missing_command_tree());
        };
        Ok(ParseResult::from_parts(
            command_tree,
            self.function_definitions.into(),
        ))
    }
}
