//! Power-of-two alphabets split into plain and special ranges.

use std::sync::LazyLock;

use crate::error::AlphabetError;

/// Letters without easily confused glyphs, digits, then the special symbols.
pub const DEFAULT_CHARS: &str = "abcdefghjkmnpqrstuwxyzABCDEFGHJKLMNPQRSTVWXYZ0123456789@#$%&()_+";

/// First special index in [`DEFAULT_CHARS`]: `@#$%&()_+` are special.
pub const DEFAULT_SPLIT: usize = 55;

static STANDARD: LazyLock<Alphabet> = LazyLock::new(Alphabet::default);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteClass {
    Plain,
    Special,
}

/// Immutable character table whose length divides 256.
///
/// Indices `[0, split)` are plain and `[split, len)` are special. Because the
/// length is a power of two, a byte reduces to an index with a mask and every
/// character has exactly `256 / len` preimages, so mapping uniform bytes
/// yields uniform characters. Classification reads the same masked index, so
/// a byte's class is known without looking at the character it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<u8>,
    mask: u8,
    split: usize,
}

impl Alphabet {
    pub fn new(chars: &str, split: usize) -> Result<Self, AlphabetError> {
        let len = chars.chars().count();
        if !(2..=256).contains(&len) || !len.is_power_of_two() {
            return Err(AlphabetError::NotPowerOfTwo { len });
        }
        if split > len {
            return Err(AlphabetError::SplitOutOfRange { split, len });
        }

        let mut seen = [false; 128];
        for ch in chars.chars() {
            if !ch.is_ascii_graphic() {
                return Err(AlphabetError::NotPrintable { ch });
            }
            if std::mem::replace(&mut seen[ch as usize], true) {
                return Err(AlphabetError::Duplicate { ch });
            }
        }

        Ok(Self {
            chars: chars.as_bytes().to_vec(),
            mask: (len - 1) as u8,
            split,
        })
    }

    /// The process-wide default alphabet, built once.
    pub fn standard() -> &'static Alphabet {
        &STANDARD
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Index of the first special character.
    #[inline]
    pub fn split(&self) -> usize {
        self.split
    }

    pub fn as_str(&self) -> &str {
        // Safety: validated as ASCII in `new`
        unsafe { std::str::from_utf8_unchecked(&self.chars) }
    }

    pub fn plain(&self) -> &str {
        &self.as_str()[..self.split]
    }

    pub fn special(&self) -> &str {
        &self.as_str()[self.split..]
    }

    pub fn special_count(&self) -> usize {
        self.len() - self.split
    }

    /// Chance that one uniform byte maps to a special character.
    pub fn special_probability(&self) -> f64 {
        self.special_count() as f64 / self.len() as f64
    }

    #[inline(always)]
    pub fn classify(&self, byte: u8) -> ByteClass {
        if (byte & self.mask) as usize >= self.split {
            ByteClass::Special
        } else {
            ByteClass::Plain
        }
    }

    #[inline(always)]
    pub fn map(&self, byte: u8) -> u8 {
        self.chars[(byte & self.mask) as usize]
    }

    pub fn contains(&self, ch: u8) -> bool {
        self.chars.contains(&ch)
    }

    /// Whether an output character belongs to the special range.
    pub fn is_special_char(&self, ch: u8) -> bool {
        self.chars[self.split..].contains(&ch)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            chars: DEFAULT_CHARS.as_bytes().to_vec(),
            mask: 63,
            split: DEFAULT_SPLIT,
        }
    }
}
