// ABOUTME: Extracts human-relevant lines from failed-record logs.
// ABOUTME: Builds the deduplicated report attached to deployment failures.

use std::collections::BTreeSet;
use std::fmt;

use crate::types::NamespacePath;

/// Marker for lines a process wrote to its error stream.
const STDERR_MARKER: &str = "STDERR";

/// Marker for lines the platform's own tooling flagged as fatal.
const FATAL_MARKER: &str = "FATAL";

/// Aggregated log excerpt for one failed operation.
///
/// Lines are deduplicated across records; insertion order is irrelevant,
/// so a sorted set keeps the rendered output deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticReport {
    namespace: NamespacePath,
    lines: BTreeSet<String>,
}

impl DiagnosticReport {
    pub fn new(namespace: NamespacePath) -> Self {
        Self {
            namespace,
            lines: BTreeSet::new(),
        }
    }

    /// Fold one record's raw log lines into the report.
    ///
    /// Surviving lines are prefixed with the record's resource name so a
    /// reader can trace each excerpt back to the resource that produced it.
    pub fn absorb(&mut self, resource: &str, raw_lines: &[String]) {
        for line in raw_lines {
            if let Some(kept) = relevant(line) {
                self.lines.insert(format!("{resource}: {kept}"));
            }
        }
    }

    /// Namespace path of the operation this report belongs to.
    pub fn namespace(&self) -> &NamespacePath {
        &self.namespace
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// An empty report still accompanies a failure; no relevant log line
    /// was found, but the failure itself is never suppressed.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for DiagnosticReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lines.is_empty() {
            return write!(f, "no relevant log lines captured for {}", self.namespace);
        }

        write!(f, "log excerpt for {}:", self.namespace)?;
        for line in &self.lines {
            write!(f, "\n  {line}")?;
        }
        Ok(())
    }
}

/// Decide whether a raw log line is worth surfacing to a human.
///
/// FATAL lines are trimmed to start at the marker so timestamps and
/// process prefixes drop; the check runs before the STDERR rule so a line
/// carrying both markers is still trimmed.
fn relevant(line: &str) -> Option<&str> {
    if let Some(at) = line.find(FATAL_MARKER) {
        return Some(&line[at..]);
    }
    if line.contains(STDERR_MARKER) {
        return Some(line);
    }
    None
}
