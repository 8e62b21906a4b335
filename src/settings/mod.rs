//! Sampling settings.

mod file;

use std::path::Path;

use tracing::warn;

use crate::error::{RequestError, SampleError, SettingsError};
use crate::pass::entropy::{self, WARN_EXPECTED_ATTEMPTS};
use crate::pass::request::check;
use crate::pass::{Alphabet, SampleRequest, Sampler};
use crate::rand::EntropyMode;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub length: usize,
    pub min_special: usize,
    pub mode: EntropyMode,
    pub alphabet: Alphabet,
    pub max_attempts: Option<u64>,
}

impl Settings {
    /// Loads `$HOME/.config/quotapass/settings`, creating it with defaults.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(file::default_path())
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let mut settings = Settings::default();
        file::load(&mut settings, path.as_ref())?;
        Ok(settings)
    }

    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(file::default_path())
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        file::save(self, path.as_ref())
    }

    /// Checks the request and warns when the quota is improbable enough
    /// that sampling will spin for a long time.
    pub fn validate(&self) -> Result<(), RequestError> {
        check(self.length, self.min_special, &self.alphabet)?;

        let expected = entropy::expected_attempts(
            self.length,
            self.min_special,
            self.alphabet.special_probability(),
        );
        if expected > WARN_EXPECTED_ATTEMPTS {
            warn!(
                length = self.length,
                min_special = self.min_special,
                expected_attempts = expected,
                "special-character quota is improbable for this alphabet"
            );
        }
        Ok(())
    }

    pub fn request(&self) -> Result<SampleRequest, RequestError> {
        self.validate()?;
        Ok(SampleRequest::new(self.length, self.min_special, self.mode))
    }

    /// Sampler over this alphabet and the mode's shared source.
    pub fn sampler(&self) -> Sampler<'_> {
        let sampler = Sampler::new(&self.alphabet, self.mode.source());
        match self.max_attempts {
            Some(max) => sampler.with_max_attempts(max),
            None => sampler,
        }
    }

    pub fn generate(&self) -> Result<String, SampleError> {
        self.validate()?;
        self.sampler().generate(self.length, self.min_special)
    }

    pub fn entropy_bits(&self) -> f64 {
        entropy::bits(self.length, self.alphabet.len())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: 24,
            min_special: 1,
            mode: EntropyMode::Secure,
            alphabet: Alphabet::default(),
            max_attempts: None,
        }
    }
}
