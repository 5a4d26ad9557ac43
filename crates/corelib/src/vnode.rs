//! Virtual node views.
//!
//! Each physical node owns `virtual_node_count` hash positions on the ring.
//! The ring itself stores them as two parallel tables (hashes and owners);
//! `VirtualNode` is the borrowed pair view used for inspection and tests.

/// One `(hash, node)` position on the ring, borrowed from the ring's tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualNode<'a, N> {
    /// Masked hash position on the ring.
    pub hash: u64,
    /// Physical node that owns this position.
    pub node: &'a N,
}
