//! Core hash algorithm trait definitions.

/// A hash algorithm converts byte strings into fixed-width hash values for
/// placement on the ring.
///
/// Algorithms are stateless and thread-safe, allowing concurrent hashing
/// without synchronization overhead.
pub trait HashAlgorithm: Send + Sync + 'static {
    /// Width of the full digest in bytes.
    ///
    /// The ring clamps its configured hash byte size down to this value;
    /// clamping up is never permitted.
    fn digest_size(&self) -> usize;

    /// Hashes `data`, returning the low eight bytes of the digest.
    ///
    /// The ring masks the value further according to its effective byte size.
    fn hash(&self, data: &[u8]) -> u64;

    /// Returns the name of this algorithm.
    fn name(&self) -> &'static str;
}
