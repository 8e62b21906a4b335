//! Per-call sampling parameters.

use super::charset::Alphabet;
use super::entropy;
use super::generate::Sampler;
use crate::error::{RequestError, SampleError};
use crate::rand::EntropyMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRequest {
    pub length: usize,
    pub min_special: usize,
    pub mode: EntropyMode,
}

impl SampleRequest {
    pub fn new(length: usize, min_special: usize, mode: EntropyMode) -> Self {
        Self {
            length,
            min_special,
            mode,
        }
    }

    pub fn validate(&self, alphabet: &Alphabet) -> Result<(), RequestError> {
        check(self.length, self.min_special, alphabet)
    }

    /// Mean number of fills before a sample meets the quota.
    pub fn expected_attempts(&self, alphabet: &Alphabet) -> f64 {
        entropy::expected_attempts(self.length, self.min_special, alphabet.special_probability())
    }

    /// Draws from the shared source selected by `mode`.
    pub fn generate(&self, alphabet: &Alphabet) -> Result<String, SampleError> {
        Sampler::new(alphabet, self.mode.source()).generate(self.length, self.min_special)
    }
}

/// Rejects requests that are malformed or can never be met.
pub(crate) fn check(length: usize, min_special: usize, alphabet: &Alphabet) -> Result<(), RequestError> {
    if length == 0 {
        return Err(RequestError::ZeroLength);
    }
    if min_special > length {
        return Err(RequestError::QuotaExceedsLength { min_special, length });
    }
    if min_special > 0 && alphabet.special_count() == 0 {
        return Err(RequestError::NoSpecialCharacters { min_special });
    }
    Ok(())
}
