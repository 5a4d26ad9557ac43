//! BLAKE3 hash algorithm implementation.

use crate::algorithm::traits::HashAlgorithm;

/// BLAKE3 algorithm: cryptographic 32-byte digests, truncated to the low
/// eight bytes for ring placement.
#[derive(Clone, Copy, Debug, Default)]
pub struct Blake3Algorithm;

impl HashAlgorithm for Blake3Algorithm {
    fn digest_size(&self) -> usize {
        32
    }

    fn hash(&self, data: &[u8]) -> u64 {
        let digest = blake3::hash(data);
        let bytes: [u8; 8] = digest.as_bytes()[..8].try_into().expect("8 bytes");
        u64::from_le_bytes(bytes)
    }

    fn name(&self) -> &'static str {
        "blake3"
    }
}
