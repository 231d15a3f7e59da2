// ABOUTME: Scripted in-memory fake of the Remote API collaborator.
// ABOUTME: Replays queued responses and records call counts per operation.

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};

use stolos::platform::{
    ActionOps, ApiResponse, DeploymentOps, OperationHandle, OperationKind, OperationState,
    OperationStatus, PlatformError, ProcedureOps, RecordOutcome, StatusOps,
};
use stolos::types::{NamespacePath, OperationId, OperationScope, RecordId};

/// Namespace every scripted status reports.
pub const NAMESPACE: &str = "/acme/web/prod/manifest";

/// Scripted fake of the Remote API. Each call pops the next queued
/// response for its operation; running out of script is a test bug and
/// panics with a pointed message.
#[derive(Default)]
pub struct FakePlatform {
    submits: Mutex<VecDeque<Result<Option<ApiResponse>, PlatformError>>>,
    handles: Mutex<VecDeque<Result<OperationHandle, PlatformError>>>,
    statuses: Mutex<VecDeque<Result<OperationStatus, PlatformError>>>,
    records: Mutex<VecDeque<Result<Vec<RecordOutcome>, PlatformError>>>,
    logs: Mutex<HashMap<u64, Result<Vec<String>, PlatformError>>>,
    cancels: Mutex<VecDeque<Result<(), PlatformError>>>,

    submit_count: AtomicUsize,
    handle_count: AtomicUsize,
    status_count: AtomicUsize,
    records_count: AtomicUsize,
    log_count: AtomicUsize,
    cancel_count: AtomicUsize,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_submit(&self, response: Result<Option<ApiResponse>, PlatformError>) {
        self.submits.lock().push_back(response);
    }

    pub fn queue_handle(&self, handle: Result<OperationHandle, PlatformError>) {
        self.handles.lock().push_back(handle);
    }

    pub fn queue_status(&self, status: Result<OperationStatus, PlatformError>) {
        self.statuses.lock().push_back(status);
    }

    pub fn queue_state(&self, state: OperationState) {
        self.queue_status(Ok(status_snapshot(state)));
    }

    pub fn queue_records(&self, records: Result<Vec<RecordOutcome>, PlatformError>) {
        self.records.lock().push_back(records);
    }

    pub fn set_record_log(&self, record_id: u64, log: Result<Vec<String>, PlatformError>) {
        self.logs.lock().insert(record_id, log);
    }

    pub fn queue_cancel(&self, result: Result<(), PlatformError>) {
        self.cancels.lock().push_back(result);
    }

    pub fn submit_calls(&self) -> usize {
        self.submit_count.load(Ordering::SeqCst)
    }

    pub fn handle_calls(&self) -> usize {
        self.handle_count.load(Ordering::SeqCst)
    }

    pub fn status_calls(&self) -> usize {
        self.status_count.load(Ordering::SeqCst)
    }

    pub fn records_calls(&self) -> usize {
        self.records_count.load(Ordering::SeqCst)
    }

    pub fn log_calls(&self) -> usize {
        self.log_count.load(Ordering::SeqCst)
    }

    pub fn cancel_calls(&self) -> usize {
        self.cancel_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatusOps for FakePlatform {
    async fn fetch_status(
        &self,
        _handle: &OperationHandle,
    ) -> Result<OperationStatus, PlatformError> {
        self.status_count.fetch_add(1, Ordering::SeqCst);
        self.statuses
            .lock()
            .pop_front()
            .expect("no scripted status left")
    }

    async fn cancel(&self, _handle: &OperationHandle) -> Result<(), PlatformError> {
        self.cancel_count.fetch_add(1, Ordering::SeqCst);
        self.cancels.lock().pop_front().unwrap_or(Ok(()))
    }
}

#[async_trait]
impl DeploymentOps for FakePlatform {
    async fn submit_deployment(
        &self,
        _scope: &OperationScope,
    ) -> Result<Option<ApiResponse>, PlatformError> {
        self.submit_count.fetch_add(1, Ordering::SeqCst);
        self.submits
            .lock()
            .pop_front()
            .expect("no scripted submit response left")
    }

    async fn deployment_records(
        &self,
        _handle: &OperationHandle,
    ) -> Result<Vec<RecordOutcome>, PlatformError> {
        self.records_count.fetch_add(1, Ordering::SeqCst);
        self.records
            .lock()
            .pop_front()
            .expect("no scripted record breakdown left")
    }

    async fn record_log(
        &self,
        _handle: &OperationHandle,
        record: RecordId,
    ) -> Result<Vec<String>, PlatformError> {
        self.log_count.fetch_add(1, Ordering::SeqCst);
        self.logs
            .lock()
            .remove(&record.value())
            .expect("no scripted log for record")
    }
}

#[async_trait]
impl ActionOps for FakePlatform {
    async fn submit_action(
        &self,
        _scope: &OperationScope,
        _target: &str,
        _args: &Value,
    ) -> Result<OperationHandle, PlatformError> {
        self.handle_count.fetch_add(1, Ordering::SeqCst);
        self.handles
            .lock()
            .pop_front()
            .expect("no scripted handle left")
    }
}

#[async_trait]
impl ProcedureOps for FakePlatform {
    async fn submit_procedure(
        &self,
        _scope: &OperationScope,
        _args: &Value,
    ) -> Result<OperationHandle, PlatformError> {
        self.handle_count.fetch_add(1, Ordering::SeqCst);
        self.handles
            .lock()
            .pop_front()
            .expect("no scripted handle left")
    }
}

/// Scope every test targets.
pub fn scope() -> OperationScope {
    OperationScope::new("acme", "web", "prod").unwrap()
}

/// A status snapshot in the shared test namespace.
pub fn status_snapshot(state: OperationState) -> OperationStatus {
    OperationStatus {
        state,
        namespace: NamespacePath::new(NAMESPACE),
        created_at: None,
        updated_at: None,
        records: None,
    }
}

/// One record of a deployment breakdown.
pub fn record(id: u64, resource: &str, state: OperationState) -> RecordOutcome {
    RecordOutcome {
        id: RecordId::new(id),
        resource: resource.to_string(),
        state,
    }
}

/// A submission acknowledgement body with the given id and comments.
pub fn ack_response(id: Option<u64>, comments: Option<&str>) -> ApiResponse {
    let mut body = serde_json::Map::new();
    if let Some(id) = id {
        body.insert("deploymentId".to_string(), id.into());
    }
    if let Some(comments) = comments {
        body.insert("comments".to_string(), comments.into());
    }
    ApiResponse::new(200, Value::Object(body).to_string())
}

/// A handle the fake hands back for action/procedure submissions.
pub fn handle(kind: OperationKind, id: u64) -> OperationHandle {
    OperationHandle::new(kind, OperationId::new(id), scope())
}
