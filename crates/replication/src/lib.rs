//! Replica placement strategies for the static hash ring.
//!
//! Strategies decide how many replicas an item gets and which nodes hold
//! them. All placement flows through the ring's successor fold, so every
//! strategy inherits its determinism and distinct-node guarantees.

pub mod error;
pub mod strategy;

pub use error::ReplicationError;
pub use strategy::{ReplicationStrategy, SimpleStrategy};
