//! Declarative ring configuration.
//!
//! Configuration parsing belongs to higher layers; this type gives them a
//! stable shape to deserialize into and resolve to a [`RingBuilder`].

use serde::{Deserialize, Serialize};

use crate::algorithm;
use crate::error::Result;
use crate::ring::RingBuilder;

/// Declarative ring options, resolvable into a [`RingBuilder`].
///
/// Numeric fields are validated when the builder runs; the algorithm name is
/// resolved here and unknown names fail instead of defaulting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingConfig {
    /// Virtual nodes hashed per physical node.
    pub virtual_node_count: usize,
    /// Upper bound on the hash width in bytes, clamped down to the
    /// algorithm's digest size at build time.
    pub max_hash_byte_size: usize,
    /// Registered algorithm name: `"xxh3"`, `"sip13"`, or `"blake3"`.
    pub algorithm: String,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            virtual_node_count: RingBuilder::DEFAULT_VIRTUAL_NODE_COUNT,
            max_hash_byte_size: RingBuilder::DEFAULT_MAX_HASH_BYTE_SIZE,
            algorithm: "xxh3".to_string(),
        }
    }
}

impl RingConfig {
    /// Resolves the named algorithm and returns a matching builder.
    pub fn builder(&self) -> Result<RingBuilder> {
        Ok(RingBuilder::new()
            .virtual_nodes(self.virtual_node_count)
            .max_hash_bytes(self.max_hash_byte_size)
            .algorithm(algorithm::by_name(&self.algorithm)?))
    }
}
