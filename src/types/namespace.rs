// ABOUTME: Opaque namespace path reported by the platform for an operation.
// ABOUTME: Carried verbatim into diagnostics; never parsed by this crate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A hierarchical location string identifying where in the platform's
/// resource tree an operation ran.
///
/// The platform chooses the format; this crate only threads the value
/// through to diagnostics output.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamespacePath(String);

impl NamespacePath {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NamespacePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
