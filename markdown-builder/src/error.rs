use serde::{Deserialize, Serialize};

/// Problems detected while appending content.
///
/// These never abort a builder chain: the offending block is skipped and the
/// error is kept until the document is built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("mismatch column count: row {row} has {found} cells, header has {expected}")]
    ColumnMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl ValidationError {
    /// Stable diagnostic code.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::ColumnMismatch { .. } => "MD001",
        }
    }
}

/// Error returned by [`MarkdownBuilder::build`](crate::MarkdownBuilder::build).
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// One or more tables were rejected. Most recent first.
    #[error("{}", chain(.0))]
    Validation(Vec<ValidationError>),

    /// The destination refused the rendered text.
    #[error("failed to write markdown text: {source}{}", pending_suffix(.pending))]
    Write {
        #[source]
        source: std::io::Error,
        /// Validation history that was pending when the write failed.
        pending: Vec<ValidationError>,
    },
}

impl BuildError {
    /// Validation errors carried by this error, most recent first.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            BuildError::Validation(errors) => errors,
            BuildError::Write { pending, .. } => pending,
        }
    }
}

fn chain(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("failed to validate columns: {e}"))
        .collect::<Vec<_>>()
        .join(": ")
}

fn pending_suffix(pending: &[ValidationError]) -> String {
    if pending.is_empty() {
        String::new()
    } else {
        format!(": {}", chain(pending))
    }
}

/// A non-fatal finding about a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl From<&ValidationError> for Diagnostic {
    fn from(err: &ValidationError) -> Self {
        Diagnostic {
            severity: Severity::Error,
            message: err.to_string(),
            code: Some(err.code().into()),
        }
    }
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}
