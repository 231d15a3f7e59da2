// ABOUTME: Tests for rollout state transitions.
// ABOUTME: Verifies transition methods exist and return correct state types.

use stolos::config::ControllerConfig;
use stolos::deploy::{DeployError, Drafted, Rollout, Settled, Submitted, Verified};
use stolos::diagnostics::Diagnostics;
use stolos::platform::{DeploymentOps, OperationStatus};
use stolos::types::OperationScope;

/// Test: Verifies the type signatures of all transition methods compile
/// correctly. This function is never called, but it must compile; if any
/// signature is wrong, the state machine is wired up improperly.
#[test]
fn transition_type_signatures_compile() {
    #[allow(dead_code)]
    async fn check_signatures<P: DeploymentOps>(platform: &P) {
        let mut diag = Diagnostics::default();
        let scope = OperationScope::new("acme", "web", "prod").unwrap();

        // Drafted -> Submitted
        let r1: Rollout<Drafted> = Rollout::new(scope, ControllerConfig::default());
        let r2: Result<Rollout<Submitted>, DeployError> = r1.submit(platform).await;

        // Submitted -> Verified
        let r3: Result<Rollout<Verified>, DeployError> = r2.unwrap().verify(platform).await;

        // Verified -> Settled
        let r4: Result<Rollout<Settled>, DeployError> =
            r3.unwrap().watch(platform, &mut diag).await;

        // Settled - terminal state
        let _status: OperationStatus = r4.unwrap().into_status();
    }
}

/// Test: The handle accessor only exists once admission is verified.
#[test]
fn handle_accessor_requires_verified_state() {
    #[allow(dead_code)]
    fn check_accessor(rollout: &Rollout<Verified>) -> u64 {
        rollout.handle().id.value()
    }
}
