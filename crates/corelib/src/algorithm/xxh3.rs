//! XXH3 hash algorithm implementation.

use xxhash_rust::xxh3::xxh3_64;

use crate::algorithm::traits::HashAlgorithm;

/// XXH3 algorithm: fast non-cryptographic 64-bit hashing. The default ring
/// algorithm.
#[derive(Clone, Copy, Debug, Default)]
pub struct Xxh3Algorithm;

impl HashAlgorithm for Xxh3Algorithm {
    fn digest_size(&self) -> usize {
        8
    }

    fn hash(&self, data: &[u8]) -> u64 {
        xxh3_64(data)
    }

    fn name(&self) -> &'static str {
        "xxh3"
    }
}
