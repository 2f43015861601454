//! Shared error types for the services crate.

use thiserror::Error;

/// Failure while rendering a question or capturing an answer.
///
/// The runner never propagates this: a failed capture is degraded to an
/// incorrect, unassigned answer and the session continues.
#[derive(Debug, Error)]
#[error("answer capture failed: {0}")]
pub struct PromptError(pub String);

impl From<std::io::Error> for PromptError {
    fn from(err: std::io::Error) -> Self {
        Self(err.to_string())
    }
}
