//! Password generation.

use std::io::Write;

use tracing::{debug, trace};
use zeroize::{Zeroize, Zeroizing};

use super::charset::{Alphabet, ByteClass};
use super::request::check;
use crate::error::SampleError;
use crate::rand::ByteSource;

/// Draws strings from an alphabet with a minimum count of special characters.
///
/// Each attempt fills the whole buffer with fresh bytes and maps it in place.
/// An attempt short of the quota is thrown away entirely and the buffer is
/// refilled; nothing from a rejected attempt survives into the next. That
/// makes accepted strings uniform over all strings meeting the quota, which
/// forcing specials into some positions and shuffling would not.
pub struct Sampler<'a> {
    alphabet: &'a Alphabet,
    source: &'a dyn ByteSource,
    max_attempts: Option<u64>,
}

impl<'a> Sampler<'a> {
    pub fn new(alphabet: &'a Alphabet, source: &'a dyn ByteSource) -> Self {
        Self {
            alphabet,
            source,
            max_attempts: None,
        }
    }

    /// Fail with [`SampleError::AttemptsExhausted`] instead of looping past
    /// `attempts` fills. Zero behaves as one.
    pub fn with_max_attempts(mut self, attempts: u64) -> Self {
        self.max_attempts = Some(attempts.max(1));
        self
    }

    /// A `length`-character string with at least `min_special` specials.
    pub fn generate(&self, length: usize, min_special: usize) -> Result<String, SampleError> {
        check(length, min_special, self.alphabet)?;

        let mut buf = vec![0u8; length];
        self.run(&mut buf, min_special)?;
        Ok(into_string(buf))
    }

    /// A `length`-character string with no quota: one fill, no retries.
    pub fn generate_unconstrained(&self, length: usize) -> Result<String, SampleError> {
        let mut buf = vec![0u8; length];
        if let Err(e) = self.source.fill(&mut buf) {
            buf.zeroize();
            return Err(e.into());
        }
        for b in buf.iter_mut() {
            *b = self.alphabet.map(*b);
        }
        Ok(into_string(buf))
    }

    /// Runs the sampler inside a caller-owned buffer, stack or heap.
    ///
    /// On success `buf` holds ASCII characters of the alphabet. On error it is
    /// zeroed.
    pub fn sample_into(&self, buf: &mut [u8], min_special: usize) -> Result<(), SampleError> {
        if let Err(e) = check(buf.len(), min_special, self.alphabet) {
            buf.zeroize();
            return Err(e.into());
        }
        self.run(buf, min_special)
    }

    /// Writes `count` newline-terminated samples to `out` through one buffer.
    pub fn generate_batch<W: Write>(
        &self,
        length: usize,
        min_special: usize,
        count: usize,
        out: &mut W,
    ) -> Result<(), SampleError> {
        check(length, min_special, self.alphabet)?;

        let mut buf = Zeroizing::new(vec![0u8; length + 1]);
        for _ in 0..count {
            self.run(&mut buf[..length], min_special)?;
            buf[length] = b'\n';
            out.write_all(&buf).map_err(SampleError::Write)?;
            buf.as_mut_slice().zeroize();
        }
        Ok(())
    }

    fn run(&self, buf: &mut [u8], min_special: usize) -> Result<(), SampleError> {
        let mut attempts: u64 = 0;
        loop {
            if let Some(max) = self.max_attempts
                && attempts >= max
            {
                buf.zeroize();
                return Err(SampleError::AttemptsExhausted { attempts });
            }
            attempts += 1;

            if let Err(e) = self.source.fill(buf) {
                buf.zeroize();
                return Err(e.into());
            }

            let specials = self.scan(buf, min_special);
            if specials >= min_special {
                debug!(length = buf.len(), min_special, attempts, "sample accepted");
                return Ok(());
            }
            trace!(attempt = attempts, specials, min_special, "sample rejected");
        }
    }

    /// Maps every byte in place. Specials are counted only until `quota`.
    #[inline]
    fn scan(&self, buf: &mut [u8], quota: usize) -> usize {
        let mut specials = 0;
        for b in buf.iter_mut() {
            if specials < quota && self.alphabet.classify(*b) == ByteClass::Special {
                specials += 1;
            }
            *b = self.alphabet.map(*b);
        }
        specials
    }
}

/// Draws one string from `source` and `alphabet` in a single call.
pub fn generate(
    length: usize,
    min_special: usize,
    source: &dyn ByteSource,
    alphabet: &Alphabet,
) -> Result<String, SampleError> {
    Sampler::new(alphabet, source).generate(length, min_special)
}

#[inline]
fn into_string(buf: Vec<u8>) -> String {
    // Safety: buf holds only characters from a validated ASCII alphabet
    unsafe { String::from_utf8_unchecked(buf) }
}
