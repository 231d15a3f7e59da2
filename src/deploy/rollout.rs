// ABOUTME: Generic rollout struct parameterized by lifecycle state.
// ABOUTME: State types carry stage-specific data for compile-time guarantees.

use crate::config::ControllerConfig;
use crate::platform::{OperationHandle, OperationStatus};
use crate::types::OperationScope;

use super::state::{Drafted, Settled, Verified};

/// A deployment rollout in progress, parameterized by its current state.
///
/// The state type parameter `S` carries stage-specific data (the submission
/// acknowledgement, the operation handle) directly in the state type. This
/// enables compile-time enforcement that a rollout cannot be polled before
/// admission has been verified, or diagnosed before it has settled.
#[derive(Debug)]
pub struct Rollout<S> {
    pub(crate) scope: OperationScope,
    pub(crate) config: ControllerConfig,
    pub(crate) state: S,
}

impl Rollout<Drafted> {
    /// Start a rollout for the given scope.
    pub fn new(scope: OperationScope, config: ControllerConfig) -> Self {
        Rollout {
            scope,
            config,
            state: Drafted,
        }
    }
}

impl<S> Rollout<S> {
    /// Get the scope this rollout targets.
    pub fn scope(&self) -> &OperationScope {
        &self.scope
    }

    /// Get the controller configuration.
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }
}

impl Rollout<Verified> {
    /// Get the platform-assigned handle being watched.
    pub fn handle(&self) -> &OperationHandle {
        &self.state.handle
    }
}

impl Rollout<Settled> {
    /// Get the terminal status snapshot; either complete or canceled.
    pub fn status(&self) -> &OperationStatus {
        &self.state.status
    }

    /// Consume the rollout and return the terminal status.
    pub fn into_status(self) -> OperationStatus {
        self.state.status
    }
}
