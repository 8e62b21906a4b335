//! Fast non-cryptographic source.

use std::sync::{Mutex, PoisonError};

use ::rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use super::ByteSource;
use crate::error::EntropyError;

/// xoshiro256++ behind a lock.
///
/// Good statistical quality and far cheaper than a syscall per fill, but the
/// state is recoverable from its output. Only for comparisons and tests.
pub struct FastSource {
    rng: Mutex<Xoshiro256PlusPlus>,
}

impl FastSource {
    /// Seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(Xoshiro256PlusPlus::from_entropy()),
        }
    }

    /// Fixed seed, for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(Xoshiro256PlusPlus::seed_from_u64(seed)),
        }
    }
}

impl Default for FastSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteSource for FastSource {
    #[inline]
    fn fill(&self, buf: &mut [u8]) -> Result<(), EntropyError> {
        // fill_bytes cannot panic midway, so a poisoned state is still whole
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.fill_bytes(buf);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "xoshiro256++"
    }
}
