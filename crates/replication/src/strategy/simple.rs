//! Simple replication strategy.
//!
//! Places replicas sequentially clockwise from the item's primary node. Works
//! well for single-failure-domain clusters; it knows nothing about topology.

use std::ops::ControlFlow;

use corelib::{HashRing, RingNode};

use crate::error::ReplicationError;
use crate::strategy::ReplicationStrategy;

/// N replicas placed sequentially around the ring, primary first.
#[derive(Debug, Clone)]
pub struct SimpleStrategy {
    replication_factor: usize,
}

impl SimpleStrategy {
    /// Creates a strategy placing `replication_factor` replicas per item.
    ///
    /// A factor of zero is structurally invalid, mirroring how the ring
    /// itself rejects a zero virtual-node count.
    pub fn new(replication_factor: usize) -> Result<Self, ReplicationError> {
        if replication_factor == 0 {
            return Err(ReplicationError::InvalidFactor);
        }
        Ok(Self { replication_factor })
    }
}

impl<N: RingNode + Clone> ReplicationStrategy<N> for SimpleStrategy {
    fn replication_factor(&self) -> usize {
        self.replication_factor
    }

    fn replicas_for(&self, ring: &HashRing<N>, item: &[u8]) -> Vec<N> {
        let factor = self.replication_factor;
        ring.fold(item, Vec::with_capacity(factor), |mut replicas, node| {
            replicas.push(node.clone());
            if replicas.len() == factor {
                ControlFlow::Break(replicas)
            } else {
                ControlFlow::Continue(replicas)
            }
        })
    }

    fn name(&self) -> &'static str {
        "SimpleStrategy"
    }
}
