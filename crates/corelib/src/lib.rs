//! Core library for the static consistent-hash ring.
//!
//! This crate provides the fundamental abstractions for consistent hashing:
//! - Injectable hash algorithms
//! - Node identifier bounds
//! - Virtual node views
//! - Ring construction, lookup, and successor folds
//! - Declarative ring configuration
//!
//! A ring is built once from a node list and is thereafter a pure value:
//! queries need no locking, and membership changes are handled by building a
//! replacement ring and swapping the reference.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod node;
pub mod ring;
pub mod vnode;

pub use algorithm::HashAlgorithm;
pub use config::RingConfig;
pub use error::{Error, Result};
pub use node::RingNode;
pub use ring::{HashRing, RingBuilder};
pub use vnode::VirtualNode;
