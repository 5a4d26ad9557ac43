//! Error types for replication strategies.

use thiserror::Error;

/// Errors from configuring replication strategies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplicationError {
    /// Replication factor must be at least 1
    #[error("replication factor must be at least 1")]
    InvalidFactor,
}
