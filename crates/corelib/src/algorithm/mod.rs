//! Hash algorithm injection for the ring.
//!
//! Every hash the ring computes goes through a [`HashAlgorithm`], so swapping
//! algorithms (fast non-cryptographic vs. cryptographic) never touches ring
//! logic.

use std::sync::Arc;

pub mod blake3;
pub mod sip;
pub mod traits;
pub mod xxh3;

pub use self::blake3::Blake3Algorithm;
pub use self::sip::Sip13Algorithm;
pub use self::traits::HashAlgorithm;
pub use self::xxh3::Xxh3Algorithm;

use crate::error::{Error, Result};

/// Resolves a registered algorithm by name.
///
/// Recognized names: `"xxh3"`, `"sip13"`, `"blake3"`. Unknown names are a
/// construction-time error, never silently defaulted.
pub fn by_name(name: &str) -> Result<Arc<dyn HashAlgorithm>> {
    match name {
        "xxh3" => Ok(Arc::new(Xxh3Algorithm)),
        "sip13" => Ok(Arc::new(Sip13Algorithm)),
        "blake3" => Ok(Arc::new(Blake3Algorithm)),
        other => Err(Error::UnknownAlgorithm(other.to_string())),
    }
}
