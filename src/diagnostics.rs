// ABOUTME: Accumulator for non-fatal warnings raised while driving operations.
// ABOUTME: Collects best-effort failures that must not mask the primary outcome.

/// Collects non-fatal warnings during an operation lifecycle.
#[derive(Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Record a warning, auto-logging it via tracing.
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!("{}", warning.message);
        self.warnings.push(warning);
    }

    /// Get all collected warnings.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Check if any warnings were collected.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// A non-fatal warning collected while driving an operation.
#[derive(Debug, Clone)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    /// Create a cancellation warning.
    pub fn cancel_failed(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::CancelFailed,
            message: message.into(),
        }
    }

    /// Create a log-fetch warning.
    pub fn log_fetch_failed(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::LogFetchFailed,
            message: message.into(),
        }
    }
}

/// Categories of warnings that can occur while driving an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Compensating cancellation did not go through; the operation's
    /// outcome stands regardless.
    CancelFailed,

    /// Log lines or the record breakdown could not be fetched; diagnostics
    /// fall back to an empty line list.
    LogFetchFailed,
}
