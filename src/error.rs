//! Error types.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum AlphabetError {
    #[error("alphabet length {len} is not a power of two in 2..=256 (modulo bias)")]
    NotPowerOfTwo { len: usize },

    #[error("split index {split} is outside alphabet of length {len}")]
    SplitOutOfRange { split: usize, len: usize },

    #[error("character {ch:?} is not printable ASCII")]
    NotPrintable { ch: char },

    #[error("character {ch:?} appears more than once")]
    Duplicate { ch: char },
}

/// Rejected before any entropy is consumed.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("length must be greater than zero")]
    ZeroLength,

    #[error("minimum of {min_special} special characters exceeds length {length}")]
    QuotaExceedsLength { min_special: usize, length: usize },

    #[error("minimum of {min_special} special characters requested but the alphabet has none")]
    NoSpecialCharacters { min_special: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum EntropyError {
    #[error("OS entropy source failed: {0}")]
    Os(#[from] io::Error),

    #[error("replay source exhausted: {requested} bytes requested, {available} left")]
    Exhausted { requested: usize, available: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum SampleError {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Entropy(#[from] EntropyError),

    #[error("no sample met the quota within {attempts} attempts")]
    AttemptsExhausted { attempts: u64 },

    #[error("failed to write sample: {0}")]
    Write(#[source] io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid settings field {field}: {value:?}")]
    Parse { field: &'static str, value: String },

    #[error(transparent)]
    Alphabet(#[from] AlphabetError),
}
