// ABOUTME: Controller tuning knobs parsed from YAML application config.
// ABOUTME: Defaults reproduce the platform reference timings.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::poll::PollPolicy;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Timing knobs for the lifecycle controller.
///
/// All values are plain data so tests can substitute short delays; nothing
/// here is read from hidden globals.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ControllerConfig {
    /// Pacing for status polls.
    #[serde(default)]
    pub poll: PollPolicy,

    /// Wait before the second admission pass. The platform's capacity
    /// check can finish after the first submit response is already on the
    /// wire, so the verdict is only trusted once it has held this long.
    #[serde(default = "default_settle_delay", with = "humantime_serde")]
    pub settle_delay: Duration,
}

fn default_settle_delay() -> Duration {
    Duration::from_secs(10)
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            poll: PollPolicy::default(),
            settle_delay: default_settle_delay(),
        }
    }
}

impl ControllerConfig {
    /// Load controller settings from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&raw)?)
    }
}
