// ABOUTME: Capability traits for the Remote API collaborator.
// ABOUTME: Implemented by application HTTP clients and by test fakes.

use async_trait::async_trait;
use serde_json::Value;

use super::error::PlatformError;
use super::types::{ApiResponse, OperationHandle, OperationStatus, RecordOutcome};
use crate::types::{OperationScope, RecordId};

/// Operations shared by every kind of asynchronous work.
#[async_trait]
pub trait StatusOps: Send + Sync {
    /// Fetch a fresh status snapshot for a submitted operation.
    async fn fetch_status(
        &self,
        handle: &OperationHandle,
    ) -> Result<OperationStatus, PlatformError>;

    /// Ask the platform to cancel an operation. Callers decide whether a
    /// failure here matters; the controller treats it as best-effort.
    async fn cancel(&self, handle: &OperationHandle) -> Result<(), PlatformError>;
}

/// Deployment submission and failure-diagnostics operations.
#[async_trait]
pub trait DeploymentOps: StatusOps {
    /// Submit a deployment of the scope's computed bill of materials.
    ///
    /// The raw response is handed back because the platform embeds
    /// admission verdicts in the body of an otherwise-successful response.
    /// `None` models a transport that completed without producing a
    /// response; validation maps it to a distinct retryable fault.
    async fn submit_deployment(
        &self,
        scope: &OperationScope,
    ) -> Result<Option<ApiResponse>, PlatformError>;

    /// Per-record breakdown of a deployment.
    async fn deployment_records(
        &self,
        handle: &OperationHandle,
    ) -> Result<Vec<RecordOutcome>, PlatformError>;

    /// Raw log lines for one record of a deployment, across all of its
    /// retry attempts.
    async fn record_log(
        &self,
        handle: &OperationHandle,
        record: RecordId,
    ) -> Result<Vec<String>, PlatformError>;
}

/// Action execution against component instances. Unlike deployments, the
/// platform's admission decision for actions is synchronous and final.
#[async_trait]
pub trait ActionOps: StatusOps {
    async fn submit_action(
        &self,
        scope: &OperationScope,
        target: &str,
        args: &Value,
    ) -> Result<OperationHandle, PlatformError>;
}

/// Operational procedures: named sequences of actions run as one unit.
#[async_trait]
pub trait ProcedureOps: StatusOps {
    async fn submit_procedure(
        &self,
        scope: &OperationScope,
        args: &Value,
    ) -> Result<OperationHandle, PlatformError>;
}
