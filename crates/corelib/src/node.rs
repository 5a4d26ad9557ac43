//! Node bounds for the consistent hash ring.
//!
//! Nodes are opaque, caller-supplied identifiers. The ring needs a total
//! order (deduplication and hash tie-breaking) and a byte view (feeding the
//! injected hash algorithm), nothing else, so the requirement is a blanket
//! trait rather than a concrete node type.

/// Bound for physical node identifiers stored in a ring.
///
/// `String`, `&'static str`, and `Vec<u8>` all qualify out of the box; so
/// does any newtype exposing its identity bytes via `AsRef<[u8]>`.
pub trait RingNode: Ord + AsRef<[u8]> {}

impl<T: Ord + AsRef<[u8]>> RingNode for T {}
