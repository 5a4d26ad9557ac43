//! Static hash ring: construction, lookup, and successor folds.

use std::fmt::{self, Debug};
use std::ops::ControlFlow;
use std::sync::Arc;

use tracing::debug;

use crate::algorithm::{HashAlgorithm, Xxh3Algorithm};
use crate::error::{Error, Result};
use crate::node::RingNode;
use crate::vnode::VirtualNode;

use super::search;

/// Widest hash value the ring can represent; digests are truncated to `u64`.
const MAX_HASH_VALUE_BYTES: usize = 8;

/// Builder carrying ring options, validated when `build` runs.
#[derive(Clone)]
pub struct RingBuilder {
    virtual_node_count: usize,
    max_hash_byte_size: usize,
    algorithm: Arc<dyn HashAlgorithm>,
}

impl Default for RingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RingBuilder {
    /// Default virtual nodes hashed per physical node.
    pub const DEFAULT_VIRTUAL_NODE_COUNT: usize = 1024;
    /// Default upper bound on the hash width in bytes.
    pub const DEFAULT_MAX_HASH_BYTE_SIZE: usize = 4;

    /// Creates a builder with default options: 1024 virtual nodes per node,
    /// 4-byte hashes, XXH3.
    pub fn new() -> Self {
        Self {
            virtual_node_count: Self::DEFAULT_VIRTUAL_NODE_COUNT,
            max_hash_byte_size: Self::DEFAULT_MAX_HASH_BYTE_SIZE,
            algorithm: Arc::new(Xxh3Algorithm),
        }
    }

    /// Sets how many virtual nodes each physical node owns.
    pub fn virtual_nodes(mut self, count: usize) -> Self {
        self.virtual_node_count = count;
        self
    }

    /// Caps the hash width in bytes.
    ///
    /// Clamped down to the algorithm's digest size at build time; clamping up
    /// is never permitted.
    pub fn max_hash_bytes(mut self, bytes: usize) -> Self {
        self.max_hash_byte_size = bytes;
        self
    }

    /// Injects the hash algorithm used for all hashing in the ring.
    pub fn algorithm(mut self, algorithm: Arc<dyn HashAlgorithm>) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Builds an immutable ring from `nodes`.
    ///
    /// Duplicate nodes are silently dropped. An empty iterator is legal and
    /// yields a degenerate ring whose folds never invoke the accumulator.
    /// Fails only on structurally invalid options.
    pub fn build<N, I>(self, nodes: I) -> Result<HashRing<N>>
    where
        N: RingNode,
        I: IntoIterator<Item = N>,
    {
        if self.virtual_node_count == 0 {
            return Err(Error::InvalidVirtualNodeCount);
        }
        if !(1..=MAX_HASH_VALUE_BYTES).contains(&self.max_hash_byte_size) {
            return Err(Error::InvalidHashByteSize(self.max_hash_byte_size));
        }

        let mut nodes: Vec<N> = nodes.into_iter().collect();
        nodes.sort_unstable();
        nodes.dedup();

        let effective = self.max_hash_byte_size.min(self.algorithm.digest_size());
        let hash_mask = mask_for(effective);

        let mut pairs: Vec<(u64, u32)> =
            Vec::with_capacity(nodes.len() * self.virtual_node_count);
        let mut seed = Vec::new();
        for (owner, node) in nodes.iter().enumerate() {
            for replica in 0..self.virtual_node_count {
                seed.clear();
                seed.extend_from_slice(&(replica as u64).to_be_bytes());
                seed.extend_from_slice(node.as_ref());
                pairs.push((self.algorithm.hash(&seed) & hash_mask, owner as u32));
            }
        }
        // Owner indices follow node order (nodes are sorted), so this orders
        // by the full (hash, node) pair and hash collisions between different
        // nodes still sort deterministically.
        pairs.sort_unstable();

        let mut virtual_node_hashes = Vec::with_capacity(pairs.len() + 1);
        let mut virtual_node_owners = Vec::with_capacity(pairs.len());
        for (hash, owner) in pairs {
            virtual_node_hashes.push(hash);
            virtual_node_owners.push(owner);
        }
        // Sentinel: above every masked hash, so the search always lands
        // inside the table. Saturates at the full eight-byte width, where
        // first-match-on-equality keeps lookups exact.
        virtual_node_hashes.push(hash_mask.saturating_add(1));

        debug!(
            nodes = nodes.len(),
            virtual_nodes = virtual_node_owners.len(),
            hash_mask,
            algorithm = self.algorithm.name(),
            "built hash ring"
        );

        Ok(HashRing {
            virtual_node_hashes,
            virtual_node_owners,
            nodes,
            hash_mask,
            algorithm: self.algorithm,
        })
    }
}

impl Debug for RingBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuilder")
            .field("virtual_node_count", &self.virtual_node_count)
            .field("max_hash_byte_size", &self.max_hash_byte_size)
            .field("algorithm", &self.algorithm.name())
            .finish()
    }
}

fn mask_for(bytes: usize) -> u64 {
    debug_assert!((1..=MAX_HASH_VALUE_BYTES).contains(&bytes));
    if bytes >= MAX_HASH_VALUE_BYTES {
        u64::MAX
    } else {
        (1u64 << (8 * bytes)) - 1
    }
}

/// Immutable consistent-hash ring over physical nodes of type `N`.
///
/// Built once by [`RingBuilder::build`]; afterwards a pure value with no
/// interior mutability, safe to share across any number of reader threads.
/// Membership changes are handled by building a replacement ring and swapping
/// the reference.
pub struct HashRing<N> {
    /// Ascending virtual-node hash positions, sentinel-terminated.
    virtual_node_hashes: Vec<u64>,
    /// Owner of each virtual node as an index into `nodes`; positionally
    /// aligned with the hash table, sentinel excluded.
    virtual_node_owners: Vec<u32>,
    /// Deduplicated physical nodes in sorted order.
    nodes: Vec<N>,
    /// Truncates every hash to the effective byte width.
    hash_mask: u64,
    algorithm: Arc<dyn HashAlgorithm>,
}

impl<N: RingNode> HashRing<N> {
    /// Builds a ring from `nodes` with default options.
    pub fn new<I: IntoIterator<Item = N>>(nodes: I) -> Result<Self> {
        RingBuilder::new().build(nodes)
    }

    /// The deduplicated, sorted physical node set.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Number of distinct physical nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of virtual nodes on the ring.
    pub fn virtual_node_count(&self) -> usize {
        self.virtual_node_owners.len()
    }

    /// Mask applied to every hash on this ring.
    pub fn hash_mask(&self) -> u64 {
        self.hash_mask
    }

    /// The injected hash algorithm.
    pub fn algorithm(&self) -> &Arc<dyn HashAlgorithm> {
        &self.algorithm
    }

    /// Virtual nodes in ring order.
    pub fn virtual_nodes(&self) -> impl Iterator<Item = VirtualNode<'_, N>> {
        self.virtual_node_owners
            .iter()
            .zip(&self.virtual_node_hashes)
            .map(|(&owner, &hash)| VirtualNode {
                hash,
                node: &self.nodes[owner as usize],
            })
    }

    /// Folds `accumulate` over `item`'s successor nodes in ring order.
    ///
    /// The walk starts at the first virtual node whose hash is at or after
    /// `item`'s masked hash, wraps circularly, and offers each distinct
    /// physical node to `accumulate` exactly once. `ControlFlow::Break` stops
    /// the walk and returns its value immediately; otherwise the walk ends
    /// once every physical node has been offered. An empty ring returns
    /// `init` untouched.
    pub fn fold<'a, K, B, F>(&'a self, item: &K, init: B, mut accumulate: F) -> B
    where
        K: AsRef<[u8]> + ?Sized,
        F: FnMut(B, &'a N) -> ControlFlow<B, B>,
    {
        let mut remaining = self.nodes.len();
        if remaining == 0 {
            return init;
        }

        let item_hash = self.algorithm.hash(item.as_ref()) & self.hash_mask;
        let start = search::start_position(
            &self.virtual_node_hashes,
            item_hash,
            self.partition_size(),
        );

        let owners = &self.virtual_node_owners;
        let mut visited = vec![false; self.nodes.len()];
        let mut acc = init;
        let mut position = start;
        loop {
            if position >= owners.len() {
                position = 0;
            }
            let owner = owners[position] as usize;
            if !visited[owner] {
                visited[owner] = true;
                acc = match accumulate(acc, &self.nodes[owner]) {
                    ControlFlow::Continue(next) => next,
                    ControlFlow::Break(out) => return out,
                };
                remaining -= 1;
                if remaining == 0 {
                    return acc;
                }
            }
            position += 1;
        }
    }

    /// The primary node for `item`: its first distinct successor.
    pub fn lookup<K: AsRef<[u8]> + ?Sized>(&self, item: &K) -> Option<&N> {
        self.fold(item, None, |_, node| ControlFlow::Break(Some(node)))
    }

    /// The first `count` distinct successors for `item`, in walk order.
    ///
    /// Shorter than `count` when the ring holds fewer distinct nodes.
    pub fn successors<K: AsRef<[u8]> + ?Sized>(&self, item: &K, count: usize) -> Vec<&N> {
        if count == 0 {
            return Vec::new();
        }
        let capacity = count.min(self.nodes.len());
        self.fold(item, Vec::with_capacity(capacity), |mut acc, node| {
            acc.push(node);
            if acc.len() == count {
                ControlFlow::Break(acc)
            } else {
                ControlFlow::Continue(acc)
            }
        })
    }

    /// Expected gap between consecutive virtual-node hashes, used to steer
    /// interpolation probes. Computed in `u128`: the ring spans
    /// `hash_mask + 1` values, which overflows `u64` at the full width.
    fn partition_size(&self) -> u64 {
        let span = u128::from(self.hash_mask) + 1;
        let slots = self.virtual_node_hashes.len() as u128;
        let size = (span / slots).max(1);
        u64::try_from(size).unwrap_or(u64::MAX)
    }
}

impl<N: Debug> Debug for HashRing<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashRing")
            .field("nodes", &self.nodes)
            .field("virtual_nodes", &self.virtual_node_owners.len())
            .field("hash_mask", &self.hash_mask)
            .field("algorithm", &self.algorithm.name())
            .finish()
    }
}
