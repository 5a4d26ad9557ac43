//! SipHash-1-3 hash algorithm implementation.

use std::hash::Hasher;

use siphasher::sip::SipHasher13;

use crate::algorithm::traits::HashAlgorithm;

/// SipHash-1-3 with a fixed zero key, for deployments that already
/// standardize on SipHash.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sip13Algorithm;

impl HashAlgorithm for Sip13Algorithm {
    fn digest_size(&self) -> usize {
        8
    }

    fn hash(&self, data: &[u8]) -> u64 {
        let mut hasher = SipHasher13::new();
        hasher.write(data);
        hasher.finish()
    }

    fn name(&self) -> &'static str {
        "sip13"
    }
}
