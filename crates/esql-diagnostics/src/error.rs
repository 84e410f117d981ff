//! Entity SQL error types

use crate::{ErrorCode, SourceLocation};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Error - the query cannot be processed
    Error,
    /// Warning - potential issue but processing continues
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with location and context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Source location
    pub location: Option<SourceLocation>,
    /// Additional context or help
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            location: None,
            help: None,
        }
    }

    /// Create a new warning diagnostic
    pub fn warning(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            location: None,
            help: None,
        }
    }

    /// Set the location
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Set help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Render for a terminal, with the severity highlighted
    #[cfg(feature = "colored")]
    pub fn to_colored_string(&self) -> String {
        use colored::Colorize;

        let severity = match self.severity {
            Severity::Error => self.severity.to_string().red().bold(),
            Severity::Warning => self.severity.to_string().yellow().bold(),
        };
        let mut out = format!("{}[{}]: {}", severity, self.code, self.message);
        if let Some(loc) = &self.location {
            out.push_str(&format!(" {}", format!("at {}", loc).dimmed()));
        }
        if let Some(help) = &self.help {
            out.push_str(&format!("\n  {}: {}", "help".cyan(), help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.severity, self.code, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " at {}", loc)?;
        }
        Ok(())
    }
}

/// Broad classification of an [`EsqlError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A precondition violated by the caller; a defect upstream, never the query author's fault
    InvalidArgument,
    /// A problem in the query text, reported to the query author
    Query,
}

/// Main Entity SQL error type
#[derive(Debug, Clone, Error)]
pub enum EsqlError {
    /// Invalid argument passed to a constructor
    #[error("{code}: {message}")]
    InvalidArgument {
        code: ErrorCode,
        message: String,
        /// Name of the offending argument
        argument: &'static str,
    },

    /// Error in the query text
    #[error("{code}: {message}")]
    Query {
        code: ErrorCode,
        message: String,
        location: Option<SourceLocation>,
    },
}

impl EsqlError {
    /// Create an invalid argument error
    pub fn invalid_argument(
        code: ErrorCode,
        argument: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            code,
            message: message.into(),
            argument,
        }
    }

    /// Create a query error
    pub fn query(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Query {
            code,
            message: message.into(),
            location: None,
        }
    }

    /// Create a query error with location
    pub fn query_at(code: ErrorCode, message: impl Into<String>, location: SourceLocation) -> Self {
        Self::Query {
            code,
            message: message.into(),
            location: Some(location),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidArgument { code, .. } => *code,
            Self::Query { code, .. } => *code,
        }
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::Query { .. } => ErrorKind::Query,
        }
    }

    /// Whether this error signals a defect in the calling code rather than in the query
    pub fn is_internal(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    /// Get the location if available
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            Self::Query { location, .. } => location.as_ref(),
            Self::InvalidArgument { .. } => None,
        }
    }

    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Self::InvalidArgument { code, message, argument } => {
                let mut diag = Diagnostic::error(*code, format!("{message} (argument `{argument}`)"));
                if let Some(help) = code.info().help {
                    diag = diag.with_help(help);
                }
                diag
            }
            Self::Query { code, message, location } => {
                let mut diag = Diagnostic::error(*code, message.clone());
                if let Some(loc) = location {
                    diag = diag.with_location(loc.clone());
                }
                diag
            }
        }
    }
}
