// ABOUTME: The Remote API collaborator seam.
// ABOUTME: Capability traits, wire types, response validation, and admission classification.

pub mod admission;
mod error;
mod ops;
pub mod response;
mod types;

pub use admission::{ACTIVE_DEPLOYMENT_CODE, Admission, ERROR_MARKER};
pub use error::PlatformError;
pub use ops::{ActionOps, DeploymentOps, ProcedureOps, StatusOps};
pub use types::{
    ApiResponse, DeploymentAck, OperationHandle, OperationKind, OperationState, OperationStatus,
    RecordOutcome,
};
