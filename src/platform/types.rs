// ABOUTME: Wire-level types exchanged with the remote platform.
// ABOUTME: Operation handles, status snapshots, and submission acknowledgements.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{NamespacePath, OperationId, OperationScope, RecordId};

/// The kinds of asynchronous work the platform runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Deployment,
    Action,
    Procedure,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationKind::Deployment => "deployment",
            OperationKind::Action => "action",
            OperationKind::Procedure => "procedure",
        };
        write!(f, "{name}")
    }
}

/// Identifies one submitted unit of work for the rest of its lifecycle.
///
/// Created once the platform has acknowledged a submission; immutable from
/// then on. A handle passes through at most one terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperationHandle {
    pub kind: OperationKind,
    pub id: OperationId,
    pub scope: OperationScope,
}

impl OperationHandle {
    pub fn new(kind: OperationKind, id: OperationId, scope: OperationScope) -> Self {
        Self { kind, id, scope }
    }
}

impl fmt::Display for OperationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} in {}", self.kind, self.id, self.scope)
    }
}

/// Lifecycle states the platform reports for an operation.
///
/// The token set is a platform contract, not free text. Tokens this crate
/// does not know map to `Unknown` and are treated as still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationState {
    Pending,
    Active,
    Paused,
    Complete,
    Failed,
    Canceled,
    #[serde(other)]
    Unknown,
}

impl OperationState {
    /// Whether no further transition can occur from this state.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            OperationState::Complete | OperationState::Failed | OperationState::Canceled
        )
    }
}

/// A status snapshot fetched by one poll.
///
/// Snapshots are never mutated in place; every poll produces a fresh one
/// and only the state value is compared against the previous.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationStatus {
    pub state: OperationState,

    #[serde(rename = "nsPath")]
    pub namespace: NamespacePath,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Per-record detail, when the platform chooses to inline it. The
    /// failure path always fetches the authoritative breakdown separately.
    #[serde(default)]
    pub records: Option<Vec<RecordOutcome>>,
}

/// One unit within an operation: a resource-change record of a deployment,
/// or an instance target of an action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordOutcome {
    pub id: RecordId,

    /// Name of the resource this record changes.
    pub resource: String,

    pub state: OperationState,
}

/// Raw acknowledgement body from a deployment submission.
///
/// The platform can accept a submission and still embed a failure verdict
/// in `comments`; every field is optional on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentAck {
    #[serde(default)]
    pub deployment_id: Option<OperationId>,

    #[serde(default)]
    pub comments: Option<String>,
}

/// A transport-level response: status line plus raw body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}
