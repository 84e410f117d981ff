//! Construction-time validation settings

use serde::{Deserialize, Serialize};

/// How strictly source spans are checked when a function definition is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ValidationMode {
    /// Reject spans whose start lies after their end
    #[default]
    Strict,
    /// Trust the parser's spans; a reversed span is logged and stored as given
    Lenient,
}

impl ValidationMode {
    /// Whether reversed spans are rejected
    pub const fn rejects_reversed_spans(self) -> bool {
        matches!(self, Self::Strict)
    }
}
