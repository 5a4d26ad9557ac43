//! Consistent hash ring implementation.
//!
//! The ring is built once from a node list and thereafter read-only. Lookups
//! interpolation-search the sorted virtual-node table for the item's start
//! position, then walk successors circularly, deduplicating physical nodes.

mod search;

pub mod ring;

pub use ring::{HashRing, RingBuilder};
