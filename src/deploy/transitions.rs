// ABOUTME: State transition methods for the rollout state machine.
// ABOUTME: Each method consumes self and returns the next state on success.

use tokio::time::sleep;

use crate::diagnostics::{Diagnostics, Warning};
use crate::platform::{
    DeploymentOps, OperationHandle, OperationKind, OperationState, OperationStatus, response,
};
use crate::poll;

use super::error::DeployError;
use super::report::DiagnosticReport;
use super::rollout::Rollout;
use super::state::{Drafted, Settled, Submitted, Verified};

// =============================================================================
// Drafted -> Submitted
// =============================================================================

impl Rollout<Drafted> {
    /// Issue the deployment submission and apply the first admission pass.
    ///
    /// # Errors
    ///
    /// Fails on transport faults and on a fatal admission verdict. A
    /// benign already-active comment is absorbed here.
    #[must_use = "rollout state must be used"]
    pub async fn submit<P: DeploymentOps>(
        self,
        platform: &P,
    ) -> Result<Rollout<Submitted>, DeployError> {
        let raw = platform.submit_deployment(&self.scope).await?;
        let ack = response::deserialize_submission(raw)?;

        Ok(Rollout {
            scope: self.scope,
            config: self.config,
            state: Submitted { ack },
        })
    }
}

// =============================================================================
// Submitted -> Verified
// =============================================================================

impl Rollout<Submitted> {
    /// Re-issue the submission after the settling delay and re-validate.
    ///
    /// The platform's admission decision is not always final in the first
    /// response; a capacity check can complete after the HTTP call
    /// returns. The verdict is trusted only once it holds across both
    /// passes.
    ///
    /// # Errors
    ///
    /// Fails on transport faults, a fatal verdict on the second pass, or
    /// when neither pass produced a deployment id.
    #[must_use = "rollout state must be used"]
    pub async fn verify<P: DeploymentOps>(
        self,
        platform: &P,
    ) -> Result<Rollout<Verified>, DeployError> {
        sleep(self.config.settle_delay).await;

        let raw = platform.submit_deployment(&self.scope).await?;
        let second = response::deserialize_submission(raw)?;

        // The pass that lost the already-active race may omit the id.
        let id = second
            .deployment_id
            .or(self.state.ack.deployment_id)
            .ok_or(DeployError::MissingDeploymentId)?;

        let handle = OperationHandle::new(OperationKind::Deployment, id, self.scope.clone());
        tracing::debug!("admission verified for {handle}");

        Ok(Rollout {
            scope: self.scope,
            config: self.config,
            state: Verified { handle },
        })
    }
}

// =============================================================================
// Verified -> Settled
// =============================================================================

impl Rollout<Verified> {
    /// Poll until the deployment reaches a terminal state.
    ///
    /// A terminal `failed` state triggers the compensation path:
    /// best-effort cancellation, the per-record breakdown, and the log
    /// excerpt report. The failure is raised even when the report comes
    /// back empty.
    ///
    /// # Errors
    ///
    /// Propagates fetch faults from polling unchanged; a failed
    /// deployment surfaces as [`DeployError::Failed`].
    #[must_use = "rollout state must be used"]
    pub async fn watch<P: DeploymentOps>(
        self,
        platform: &P,
        diag: &mut Diagnostics,
    ) -> Result<Rollout<Settled>, DeployError> {
        let handle = &self.state.handle;

        let status = poll::wait_for(
            &self.config.poll,
            |status: &OperationStatus| status.state.is_terminal(),
            || platform.fetch_status(handle),
        )
        .await?;

        if status.state == OperationState::Failed {
            return Err(self.diagnose(platform, status, diag).await);
        }

        tracing::info!("{} settled as {:?}", self.state.handle, status.state);
        Ok(Rollout {
            scope: self.scope,
            config: self.config,
            state: Settled { status },
        })
    }

    /// Compensation path for a failed deployment.
    ///
    /// Always produces [`DeployError::Failed`]; trouble with the
    /// cancellation or the log fetches is recorded as a warning instead of
    /// masking the failure itself.
    async fn diagnose<P: DeploymentOps>(
        self,
        platform: &P,
        status: OperationStatus,
        diag: &mut Diagnostics,
    ) -> DeployError {
        let handle = self.state.handle;

        if let Err(e) = platform.cancel(&handle).await {
            diag.warn(Warning::cancel_failed(format!(
                "failed to cancel {handle}: {e}"
            )));
        }

        let mut report = DiagnosticReport::new(status.namespace.clone());
        match platform.deployment_records(&handle).await {
            Ok(records) => {
                for record in records
                    .iter()
                    .filter(|r| r.state == OperationState::Failed)
                {
                    let lines = match platform.record_log(&handle, record.id).await {
                        Ok(lines) => lines,
                        Err(e) => {
                            diag.warn(Warning::log_fetch_failed(format!(
                                "no log for record {} ({}): {e}",
                                record.id, record.resource
                            )));
                            Vec::new()
                        }
                    };
                    report.absorb(&record.resource, &lines);
                }
            }
            Err(e) => {
                diag.warn(Warning::log_fetch_failed(format!(
                    "failed to fetch record breakdown for {handle}: {e}"
                )));
            }
        }

        DeployError::Failed { handle, report }
    }
}
