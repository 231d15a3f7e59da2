// ABOUTME: Validated organization/assembly/environment scope for operations.
// ABOUTME: Renders as the slash-delimited path the platform addresses work by.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScopeError {
    #[error("scope segment cannot be empty")]
    EmptySegment,

    #[error("scope segment exceeds maximum length of 63 characters")]
    SegmentTooLong,

    #[error("invalid character in scope segment: '{0}'")]
    InvalidChar(char),
}

/// Where in the platform's resource tree an operation runs.
///
/// Deployments target an environment, actions and procedures target
/// components inside one; either way the platform addresses the work by
/// this organization/assembly/environment triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperationScope {
    organization: String,
    assembly: String,
    environment: String,
}

impl OperationScope {
    pub fn new(
        organization: &str,
        assembly: &str,
        environment: &str,
    ) -> Result<Self, ScopeError> {
        for segment in [organization, assembly, environment] {
            validate_segment(segment)?;
        }

        Ok(Self {
            organization: organization.to_string(),
            assembly: assembly.to_string(),
            environment: environment.to_string(),
        })
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn assembly(&self) -> &str {
        &self.assembly
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }
}

fn validate_segment(segment: &str) -> Result<(), ScopeError> {
    if segment.is_empty() {
        return Err(ScopeError::EmptySegment);
    }

    if segment.len() > 63 {
        return Err(ScopeError::SegmentTooLong);
    }

    for c in segment.chars() {
        if !c.is_ascii_alphanumeric() && c != '-' && c != '_' {
            return Err(ScopeError::InvalidChar(c));
        }
    }

    Ok(())
}

impl fmt::Display for OperationScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/{}/{}/{}",
            self.organization, self.assembly, self.environment
        )
    }
}
