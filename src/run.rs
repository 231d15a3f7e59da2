// ABOUTME: Runner for platform actions and operational procedures.
// ABOUTME: Single-pass submission, polling, and best-effort cancel on failure.

use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::config::ControllerConfig;
use crate::diagnostics::{Diagnostics, Warning};
use crate::platform::{
    ActionOps, OperationHandle, OperationState, OperationStatus, PlatformError, ProcedureOps,
    StatusOps,
};
use crate::poll::{self, PollError};
use crate::types::OperationScope;

/// Errors that can end a run before a terminal state is observed.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error("operation did not settle within {0:?}")]
    TimedOut(Duration),
}

impl From<PollError<PlatformError>> for RunError {
    fn from(err: PollError<PlatformError>) -> Self {
        match err {
            PollError::Fetch(e) => RunError::Platform(e),
            PollError::TimedOut(limit) => RunError::TimedOut(limit),
        }
    }
}

/// Terminal result of an action or procedure run.
///
/// Unlike the deployment path, a failed run is reported in-band through
/// `succeeded` rather than as an error; per-record log collection only
/// exists for deployments.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub status: OperationStatus,
    pub succeeded: bool,
}

/// Execute an action against instances of a component and wait for it to
/// settle. Admission is synchronous for actions; there is no second
/// verification pass.
pub async fn run_action<P: ActionOps>(
    platform: &P,
    scope: &OperationScope,
    target: &str,
    args: &Value,
    config: &ControllerConfig,
    diag: &mut Diagnostics,
) -> Result<RunOutcome, RunError> {
    let handle = platform.submit_action(scope, target, args).await?;
    tracing::info!("submitted {handle} against {target}");
    settle(platform, handle, config, diag).await
}

/// Execute an operational procedure and wait for it to settle.
pub async fn run_procedure<P: ProcedureOps>(
    platform: &P,
    scope: &OperationScope,
    args: &Value,
    config: &ControllerConfig,
    diag: &mut Diagnostics,
) -> Result<RunOutcome, RunError> {
    let handle = platform.submit_procedure(scope, args).await?;
    tracing::info!("submitted {handle}");
    settle(platform, handle, config, diag).await
}

/// Poll one handle to a terminal state.
///
/// A failed run gets a best-effort cancel; the caller receives the
/// terminal status plus the success flag either way.
async fn settle<P: StatusOps>(
    platform: &P,
    handle: OperationHandle,
    config: &ControllerConfig,
    diag: &mut Diagnostics,
) -> Result<RunOutcome, RunError> {
    let status = poll::wait_for(
        &config.poll,
        |status: &OperationStatus| status.state.is_terminal(),
        || platform.fetch_status(&handle),
    )
    .await?;

    let succeeded = status.state == OperationState::Complete;

    if status.state == OperationState::Failed {
        if let Err(e) = platform.cancel(&handle).await {
            diag.warn(Warning::cancel_failed(format!(
                "failed to cancel {handle}: {e}"
            )));
        }
    }

    tracing::info!("{} settled as {:?}", handle, status.state);
    Ok(RunOutcome { status, succeeded })
}
