// ABOUTME: Error types for the Remote API collaborator seam.
// ABOUTME: Distinguishes transport faults from platform admission verdicts.

use thiserror::Error;

/// Errors surfaced by Remote API calls and response validation.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The transport completed without producing a response at all.
    #[error("no response received from the platform")]
    NoResponse,

    #[error("unexpected response status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("transport error: {0}")]
    Transport(String),

    /// The platform answered the call but refused the work itself.
    #[error("submission rejected by the platform: {0}")]
    Rejected(String),
}

impl PlatformError {
    /// Whether this is a transport-class fault a caller may retry, as
    /// opposed to a platform verdict about the submitted work.
    pub fn is_transport(&self) -> bool {
        !matches!(self, PlatformError::Rejected(_))
    }
}
