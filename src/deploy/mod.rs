// ABOUTME: Deployment lifecycle orchestration using the typestate pattern.
// ABOUTME: Submit, two-pass admission verification, polling, and failure diagnostics.

mod error;
mod report;
mod rollout;
mod state;
mod transitions;

pub use error::DeployError;
pub use report::DiagnosticReport;
pub use rollout::Rollout;
pub use state::{Drafted, Settled, Submitted, Verified};

use crate::config::ControllerConfig;
use crate::diagnostics::Diagnostics;
use crate::platform::{DeploymentOps, OperationStatus};
use crate::types::OperationScope;

/// Drive a full deployment lifecycle for one scope.
///
/// Submits, verifies admission across two passes, polls to a terminal
/// state, and on failure cancels the deployment and distills its logs.
/// The returned status is either complete or canceled; a failed
/// deployment surfaces as [`DeployError::Failed`] with the aggregated
/// [`DiagnosticReport`] attached.
pub async fn deploy<P: DeploymentOps>(
    platform: &P,
    scope: OperationScope,
    config: ControllerConfig,
    diag: &mut Diagnostics,
) -> Result<OperationStatus, DeployError> {
    let rollout = Rollout::new(scope, config);
    tracing::info!("submitting deployment for {}", rollout.scope());

    let rollout = rollout.submit(platform).await?;
    let rollout = rollout.verify(platform).await?;
    let rollout = rollout.watch(platform, diag).await?;

    Ok(rollout.into_status())
}
