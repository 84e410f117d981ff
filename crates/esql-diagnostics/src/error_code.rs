//! Entity SQL error codes following a structured numbering system
//!
//! Error code ranges:
//! - ESQL0001-ESQL0099: Query errors (syntax and semantics, reported to the query author)
//! - ESQL0400-ESQL0499: Internal errors (invalid arguments handed across crate boundaries)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a query error (0001-0099)
    pub const fn is_query_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is an internal error (0400-0499)
    pub const fn is_internal_error(&self) -> bool {
        self.0 >= 400 && self.0 < 500
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ESQL{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Query errors (0001-0099)
    map.insert(1, ErrorInfo::new("Unexpected token"));
    map.insert(4, ErrorInfo::new("Undefined function"));
    map.insert(5, ErrorInfo::new("Duplicate function definition"));

    // Internal errors (0400-0499)
    map.insert(401, ErrorInfo::new("Missing command tree")
        .with_help("A parse result always wraps the command tree produced by semantic analysis"));
    map.insert(402, ErrorInfo::new("Missing function definitions")
        .with_help("Pass an empty sequence when the query declares no inline functions"));
    map.insert(403, ErrorInfo::new("Missing function name"));
    map.insert(404, ErrorInfo::new("Missing function lambda"));
    map.insert(405, ErrorInfo::new("Invalid source span")
        .with_help("The start position must not be greater than the end position"));
    map.insert(406, ErrorInfo::new("Source span out of bounds"));
    map.insert(407, ErrorInfo::new("Duplicate command tree")
        .with_help("A parse pass produces exactly one command tree"));

    map
});

// Query errors
pub const ESQL0001: ErrorCode = ErrorCode::new(1);
pub const ESQL0004: ErrorCode = ErrorCode::new(4);
pub const ESQL0005: ErrorCode = ErrorCode::new(5);

// Internal errors
pub const ESQL0401: ErrorCode = ErrorCode::new(401);
pub const ESQL0402: ErrorCode = ErrorCode::new(402);
pub const ESQL0403: ErrorCode = ErrorCode::new(403);
pub const ESQL0404: ErrorCode = ErrorCode::new(404);
pub const ESQL0405: ErrorCode = ErrorCode::new(405);
pub const ESQL0406: ErrorCode = ErrorCode::new(406);
pub const ESQL0407: ErrorCode = ErrorCode::new(407);
