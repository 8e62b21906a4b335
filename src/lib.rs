//! Unbiased password sampling with a minimum special-character quota.
//!
//! Characters are drawn from a power-of-two alphabet so every random byte
//! maps to a character without modulo bias. A quota of special characters
//! is enforced by rejecting and redrawing the whole sample, which keeps the
//! accepted strings uniformly distributed over every string that meets it.
//!
//! ```
//! use quotapass::{Alphabet, EntropyMode, Sampler};
//!
//! let alphabet = Alphabet::default();
//! let sampler = Sampler::new(&alphabet, EntropyMode::Secure.source());
//! let pass = sampler.generate(24, 1).unwrap();
//!
//! assert_eq!(pass.len(), 24);
//! assert!(pass.bytes().any(|b| alphabet.is_special_char(b)));
//! ```

pub mod error;
pub mod pass;
pub mod rand;
pub mod settings;

pub use crate::error::{AlphabetError, EntropyError, RequestError, SampleError, SettingsError};
pub use crate::pass::{Alphabet, ByteClass, SampleRequest, Sampler};
pub use crate::rand::{ByteSource, EntropyMode};
pub use crate::settings::Settings;
