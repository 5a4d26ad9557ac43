//! Error types for the core library.

use thiserror::Error;

/// Result type alias for the core library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building a ring.
///
/// Queries never fail; every failure mode here is a structurally invalid
/// option reported at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `virtual_node_count` must be at least 1
    #[error("virtual node count must be at least 1")]
    InvalidVirtualNodeCount,
    /// `max_hash_byte_size` outside the representable hash width
    #[error("max hash byte size {0} is outside the supported range 1..=8")]
    InvalidHashByteSize(usize),
    /// No hash algorithm registered under this name
    #[error("unknown hash algorithm: {0}")]
    UnknownAlgorithm(String),
}
