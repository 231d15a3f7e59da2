// ABOUTME: Generic fixed-interval poller for long-running operations.
// ABOUTME: Fetches snapshots until a caller-supplied terminal predicate holds.

use serde::Deserialize;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// How a poll loop paces itself.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PollPolicy {
    /// Delay between consecutive status fetches. Fixed, not backed off;
    /// operation progress does not speed up under pressure.
    #[serde(default = "default_interval", with = "humantime_serde")]
    pub interval: Duration,

    /// Upper bound on the whole wait. `None` polls until the operation
    /// settles, matching the platform contract that every operation
    /// eventually reaches a terminal state.
    #[serde(default, with = "humantime_serde")]
    pub ceiling: Option<Duration>,
}

fn default_interval() -> Duration {
    Duration::from_secs(5)
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: default_interval(),
            ceiling: None,
        }
    }
}

/// Why a poll loop stopped without a terminal snapshot.
#[derive(Debug, Error)]
pub enum PollError<E> {
    /// A status fetch failed. Fetch errors are never retried here; they
    /// propagate on the first occurrence.
    #[error("status fetch failed: {0}")]
    Fetch(E),

    /// The configured ceiling elapsed first.
    #[error("operation still running after {0:?}")]
    TimedOut(Duration),
}

/// Suspend the calling task until `fetch` yields a snapshot satisfying
/// `is_terminal`.
///
/// The first fetch happens immediately; afterwards the loop sleeps for the
/// policy interval between fetches. The snapshot that first satisfies the
/// predicate is returned and the loop never resumes for that operation.
pub async fn wait_for<T, E, F, Fut, P>(
    policy: &PollPolicy,
    is_terminal: P,
    fetch: F,
) -> Result<T, PollError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    P: Fn(&T) -> bool,
{
    match policy.ceiling {
        None => run(policy.interval, is_terminal, fetch).await,
        Some(limit) => {
            match tokio::time::timeout(limit, run(policy.interval, is_terminal, fetch)).await {
                Ok(result) => result,
                Err(_elapsed) => Err(PollError::TimedOut(limit)),
            }
        }
    }
}

async fn run<T, E, F, Fut, P>(
    interval: Duration,
    is_terminal: P,
    mut fetch: F,
) -> Result<T, PollError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    P: Fn(&T) -> bool,
{
    loop {
        let snapshot = fetch().await.map_err(PollError::Fetch)?;
        if is_terminal(&snapshot) {
            return Ok(snapshot);
        }
        tokio::time::sleep(interval).await;
    }
}
