// ABOUTME: Rollout state markers for the typestate pattern.
// ABOUTME: Each state carries the data proven to exist by that stage.

use crate::platform::{DeploymentAck, OperationHandle, OperationStatus};

/// Initial state: nothing sent yet.
/// Available actions: `submit()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Drafted;

/// First admission pass accepted; the verdict is not yet trusted.
/// Available actions: `verify()`
#[derive(Debug)]
pub struct Submitted {
    pub(crate) ack: DeploymentAck,
}

/// Admission held across both passes; the platform id is known.
/// Available actions: `watch()`
#[derive(Debug)]
pub struct Verified {
    pub(crate) handle: OperationHandle,
}

/// Terminal state observed; polling is over for good.
/// Available actions: `status()`, `into_status()`
#[derive(Debug)]
pub struct Settled {
    pub(crate) status: OperationStatus,
}
