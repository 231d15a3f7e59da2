// ABOUTME: Turns raw transport responses into typed resources or faults.
// ABOUTME: Owns the success-status set and the null-response distinction.

use serde::de::DeserializeOwned;

use super::admission::{self, Admission};
use super::error::PlatformError;
use super::types::{ApiResponse, DeploymentAck};

/// Status codes the platform uses for successful calls.
const SUCCESS_STATUSES: [u16; 2] = [200, 302];

/// Deserialize a response into `T`.
///
/// `None` means the transport finished without a response at all; that is
/// reported as its own fault so callers can class it as retryable rather
/// than as a verdict about the work.
///
/// # Errors
///
/// Returns [`PlatformError::NoResponse`] for an absent response,
/// [`PlatformError::UnexpectedStatus`] for non-success status codes, and
/// [`PlatformError::Decode`] for an undecodable body.
pub fn deserialize<T: DeserializeOwned>(
    response: Option<ApiResponse>,
) -> Result<T, PlatformError> {
    let response = response.ok_or(PlatformError::NoResponse)?;

    if !SUCCESS_STATUSES.contains(&response.status) {
        return Err(PlatformError::UnexpectedStatus {
            status: response.status,
            body: response.body,
        });
    }

    Ok(serde_json::from_str(&response.body)?)
}

/// Deserialize a deployment submission response and apply the admission
/// verdict embedded in its comments.
///
/// A fatal verdict becomes [`PlatformError::Rejected`]; the benign
/// already-active race is absorbed and the acknowledgement returned as a
/// success.
pub fn deserialize_submission(
    response: Option<ApiResponse>,
) -> Result<DeploymentAck, PlatformError> {
    let ack: DeploymentAck = deserialize(response)?;

    match admission::classify(ack.comments.as_deref()) {
        Admission::Clean => Ok(ack),
        Admission::Ignorable(message) => {
            tracing::debug!("absorbing benign submission comment: {message}");
            Ok(ack)
        }
        Admission::Fatal(message) => Err(PlatformError::Rejected(message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::OperationStatus;

    #[test]
    fn absent_response_is_a_distinct_fault() {
        let result = deserialize::<DeploymentAck>(None);
        assert!(matches!(result, Err(PlatformError::NoResponse)));
    }

    #[test]
    fn non_success_status_carries_status_and_body() {
        let response = ApiResponse::new(503, "capacity exhausted");
        let result = deserialize::<DeploymentAck>(Some(response));

        match result {
            Err(PlatformError::UnexpectedStatus { status, body }) => {
                assert_eq!(status, 503);
                assert_eq!(body, "capacity exhausted");
            }
            other => panic!("expected UnexpectedStatus, got {other:?}"),
        }
    }

    #[test]
    fn ok_status_deserializes_body() {
        let response = ApiResponse::new(200, r#"{"deploymentId": 42}"#);
        let ack: DeploymentAck = deserialize(Some(response)).unwrap();
        assert_eq!(ack.deployment_id.map(|id| id.value()), Some(42));
    }

    #[test]
    fn redirect_status_counts_as_success() {
        let response = ApiResponse::new(302, r#"{"deploymentId": 7}"#);
        let ack: DeploymentAck = deserialize(Some(response)).unwrap();
        assert_eq!(ack.deployment_id.map(|id| id.value()), Some(7));
    }

    #[test]
    fn undecodable_body_is_a_decode_fault() {
        let response = ApiResponse::new(200, "not json");
        let result = deserialize::<OperationStatus>(Some(response));
        assert!(matches!(result, Err(PlatformError::Decode(_))));
    }

    #[test]
    fn submission_with_fatal_comment_is_rejected() {
        let body = r#"{"deploymentId": 9, "comments": "ERROR:BOM:capacity:insufficient hosts"}"#;
        let result = deserialize_submission(Some(ApiResponse::new(200, body)));

        match result {
            Err(PlatformError::Rejected(message)) => {
                assert_eq!(message, "ERROR:BOM:capacity:insufficient hosts");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn submission_with_ignorable_comment_passes_through() {
        let body =
            r#"{"comments": "ERROR:BOM:activedeployment:already running id=7"}"#;
        let ack = deserialize_submission(Some(ApiResponse::new(200, body))).unwrap();
        assert!(ack.deployment_id.is_none());
    }

    #[test]
    fn submission_without_comments_passes_through() {
        let body = r#"{"deploymentId": 11}"#;
        let ack = deserialize_submission(Some(ApiResponse::new(200, body))).unwrap();
        assert_eq!(ack.deployment_id.map(|id| id.value()), Some(11));
    }
}
