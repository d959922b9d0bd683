//! Crate-level error types.

use std::fmt;

/// Errors produced by the swivel crate.
#[derive(Debug)]
pub enum SwivelError {
    /// A drag-continue was issued without a preceding drag-start, so there
    /// is no previous pointer sample to diff against. This is a contract
    /// violation by the caller, not a recoverable runtime condition.
    DragNotStarted,
    /// TOML options parsing/validation failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for SwivelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DragNotStarted => {
                write!(f, "drag continued without an active drag gesture")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for SwivelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SwivelError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
