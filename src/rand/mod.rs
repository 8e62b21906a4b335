//! Byte-oriented entropy sources.

mod fast;
mod os;
mod replay;

use std::sync::{Arc, LazyLock};

pub use fast::FastSource;
pub use os::OsSource;
pub use replay::ReplaySource;

use crate::error::EntropyError;

/// Fills caller-owned buffers with independent, uniformly distributed bytes.
///
/// A source is shared between concurrent sampling calls, so `fill` takes
/// `&self` and every implementation synchronizes its own state. Each call
/// must overwrite the whole buffer.
pub trait ByteSource: Send + Sync {
    fn fill(&self, buf: &mut [u8]) -> Result<(), EntropyError>;

    /// Short human-readable name of the underlying generator.
    fn name(&self) -> &'static str;
}

impl<T: ByteSource + ?Sized> ByteSource for &T {
    #[inline]
    fn fill(&self, buf: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill(buf)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<T: ByteSource + ?Sized> ByteSource for Box<T> {
    #[inline]
    fn fill(&self, buf: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill(buf)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<T: ByteSource + ?Sized> ByteSource for Arc<T> {
    #[inline]
    fn fill(&self, buf: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill(buf)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

// =============================================================================
// Shared sources
// =============================================================================

static SECURE: OsSource = OsSource::new();
static FAST: LazyLock<FastSource> = LazyLock::new(FastSource::new);

/// Which shared source a request draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntropyMode {
    /// Kernel CSPRNG. Use this for real passwords.
    #[default]
    Secure,
    /// xoshiro256++; statistically uniform, not cryptographic.
    Fast,
}

impl EntropyMode {
    /// Process-wide source for this mode, initialized on first use.
    pub fn source(self) -> &'static dyn ByteSource {
        match self {
            EntropyMode::Secure => &SECURE,
            EntropyMode::Fast => &*FAST,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EntropyMode::Secure => "secure",
            EntropyMode::Fast => "fast",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "secure" => Some(EntropyMode::Secure),
            "fast" => Some(EntropyMode::Fast),
            _ => None,
        }
    }
}
