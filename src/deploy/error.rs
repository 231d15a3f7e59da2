// ABOUTME: Error types for the deployment lifecycle.
// ABOUTME: Carries the diagnostic report when the platform reports failure.

use std::time::Duration;
use thiserror::Error;

use crate::platform::{OperationHandle, PlatformError};
use crate::poll::PollError;

use super::report::DiagnosticReport;

/// Errors that can end a rollout before a successful terminal state.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// The platform accepted the submission on both passes but never
    /// returned an id to poll.
    #[error("platform accepted the deployment but returned no deployment id")]
    MissingDeploymentId,

    #[error("deployment did not settle within {0:?}")]
    TimedOut(Duration),

    /// Terminal `failed` state. Cancellation has already been attempted
    /// and the per-record logs distilled into the report; an empty report
    /// means no log line matched, not that the failure was benign.
    #[error("{handle} failed; {report}")]
    Failed {
        handle: OperationHandle,
        report: DiagnosticReport,
    },
}

impl DeployError {
    /// The diagnostic report, when the platform reported a failed
    /// terminal state.
    pub fn report(&self) -> Option<&DiagnosticReport> {
        match self {
            DeployError::Failed { report, .. } => Some(report),
            _ => None,
        }
    }
}

impl From<PollError<PlatformError>> for DeployError {
    fn from(err: PollError<PlatformError>) -> Self {
        match err {
            PollError::Fetch(e) => DeployError::Platform(e),
            PollError::TimedOut(limit) => DeployError::TimedOut(limit),
        }
    }
}
