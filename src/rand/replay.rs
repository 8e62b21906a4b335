//! Deterministic source replaying a scripted byte sequence.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use super::ByteSource;
use crate::error::EntropyError;

/// Hands out a fixed byte script, in order, across successive fills.
///
/// Built with [`ReplaySource::cycle`] the script wraps around forever; built
/// with [`ReplaySource::once`] a fill that needs more bytes than remain fails
/// with [`EntropyError::Exhausted`]. Useful for test vectors and for
/// counting how many attempts a sampler made.
#[derive(Debug)]
pub struct ReplaySource {
    script: Vec<u8>,
    cyclic: bool,
    pos: Mutex<usize>,
    fills: AtomicUsize,
}

impl ReplaySource {
    pub fn cycle(script: Vec<u8>) -> Self {
        Self::build(script, true)
    }

    pub fn once(script: Vec<u8>) -> Self {
        Self::build(script, false)
    }

    fn build(script: Vec<u8>, cyclic: bool) -> Self {
        Self {
            script,
            cyclic,
            pos: Mutex::new(0),
            fills: AtomicUsize::new(0),
        }
    }

    /// Number of `fill` calls served so far, failed ones included.
    pub fn fills(&self) -> usize {
        self.fills.load(Ordering::Relaxed)
    }

    /// Bytes left before a `once` script runs dry.
    pub fn remaining(&self) -> usize {
        let pos = *self.pos.lock().unwrap_or_else(PoisonError::into_inner);
        self.script.len() - pos
    }
}

impl ByteSource for ReplaySource {
    fn fill(&self, buf: &mut [u8]) -> Result<(), EntropyError> {
        self.fills.fetch_add(1, Ordering::Relaxed);
        if buf.is_empty() {
            return Ok(());
        }

        let mut pos = self.pos.lock().unwrap_or_else(PoisonError::into_inner);
        let available = self.script.len() - *pos;

        if !self.cyclic || self.script.is_empty() {
            if available < buf.len() {
                return Err(EntropyError::Exhausted {
                    requested: buf.len(),
                    available,
                });
            }
            buf.copy_from_slice(&self.script[*pos..*pos + buf.len()]);
            *pos += buf.len();
            return Ok(());
        }

        for b in buf.iter_mut() {
            *b = self.script[*pos];
            *pos = (*pos + 1) % self.script.len();
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "replay"
    }
}
