// ABOUTME: Unified crate error with SNAFU pattern.
// ABOUTME: Exposes a fault-kind taxonomy for programmatic handling.

use snafu::Snafu;

use crate::config::ConfigError;
use crate::deploy::DeployError;
use crate::platform::PlatformError;
use crate::run::RunError;

/// Unified error for controller entry points.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("deployment lifecycle failed: {source}"))]
    Deploy { source: DeployError },

    #[snafu(display("action or procedure run failed: {source}"))]
    Run { source: RunError },

    #[snafu(display("invalid controller configuration: {source}"))]
    Config { source: ConfigError },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Fault classes for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    /// No response, bad status line, or undecodable body; a retry of the
    /// whole workflow step may help.
    Transport,
    /// The platform refused the work at admission time.
    Admission,
    /// The operation reached a terminal failed state.
    OperationFailed,
    /// The optional poll ceiling elapsed first.
    Timeout,
    /// Local configuration problem.
    Config,
}

impl Error {
    /// Returns the fault kind for programmatic handling.
    pub fn kind(&self) -> FaultKind {
        match self {
            Error::Deploy { source } => match source {
                DeployError::Platform(e) => platform_kind(e),
                DeployError::MissingDeploymentId => FaultKind::Admission,
                DeployError::TimedOut(_) => FaultKind::Timeout,
                DeployError::Failed { .. } => FaultKind::OperationFailed,
            },
            Error::Run { source } => match source {
                RunError::Platform(e) => platform_kind(e),
                RunError::TimedOut(_) => FaultKind::Timeout,
            },
            Error::Config { .. } => FaultKind::Config,
        }
    }
}

fn platform_kind(error: &PlatformError) -> FaultKind {
    if error.is_transport() {
        FaultKind::Transport
    } else {
        FaultKind::Admission
    }
}

impl From<DeployError> for Error {
    fn from(source: DeployError) -> Self {
        Error::Deploy { source }
    }
}

impl From<RunError> for Error {
    fn from(source: RunError) -> Self {
        Error::Run { source }
    }
}

impl From<ConfigError> for Error {
    fn from(source: ConfigError) -> Self {
        Error::Config { source }
    }
}
