// ABOUTME: Type-safe identifiers and validated domain types.
// ABOUTME: Uses phantom types to prevent id confusion at compile time.

mod id;
mod namespace;
mod scope;

pub use id::{OperationId, RecordId};
pub use namespace::NamespacePath;
pub use scope::{OperationScope, ScopeError};
