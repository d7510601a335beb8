//! Error taxonomy
//!
//! Typed errors for the seams the dashboard crosses: the REST collaborator,
//! the tabular parser, and the import pipeline. Errors are always returned as
//! values and converted to display text at the shell; none of the domain
//! logic panics.

use thiserror::Error;

/// Failures surfaced by the REST collaborator.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Distinguished 401: the session token is missing, invalid, or expired.
    /// Not locally recoverable; the session must be terminated.
    #[error("session expired: {message}")]
    Unauthorized { message: String },

    /// Any other non-2xx response, carrying the server-provided message when
    /// one was present.
    #[error("request failed with status {code}: {message}")]
    Status { code: u16, message: String },

    /// Transport-level failure: connect, DNS, timeout.
    #[error("network error: {0}")]
    Network(String),

    /// The response arrived but its body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether this failure must terminate the session (forced logout).
    pub fn requires_logout(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Whether a manual retry of the triggering action is worth offering.
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Network(_) => true,
            ApiError::Status { code, .. } => *code >= 500,
            _ => false,
        }
    }
}

/// Failures reading a tabular file into rows of named columns.
#[derive(Debug, Error)]
pub enum TabularError {
    #[error("failed to read sheet: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed sheet at line {line}: {message}")]
    Malformed { line: usize, message: String },

    #[error("unsupported sheet format: {0}")]
    Unsupported(String),

    #[error("sheet is empty")]
    Empty,
}

/// Failures preparing a spreadsheet import before any row is created.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error(transparent)]
    Tabular(#[from] TabularError),

    /// No usable column mapping could be detected from the header row.
    #[error("could not detect required columns: {0}")]
    UnmappedColumns(String),
}
