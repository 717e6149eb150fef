use std::fmt;

use crate::error::CaseError;
use crate::variants::Variants;

/// Default maximum number of characters taken from the input.
pub const MAX_LENGTH: usize = 24;

/// Largest accepted maximum length. 2^63 variants still fit the `u64` counter.
pub const MAX_LENGTH_LIMIT: usize = 63;

/// Bounded character buffer holding the word being enumerated.
///
/// Input longer than the maximum length is truncated, never rejected. The
/// buffer is counted in `char`s, so truncation cannot split a UTF-8 sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    chars: Vec<char>,
    original_len: usize,
}

impl Word {
    /// Builds a word truncated to [`MAX_LENGTH`] characters.
    pub fn new(input: &str) -> Self {
        Self::truncated(input, MAX_LENGTH)
    }

    /// Builds a word truncated to `max_length` characters.
    pub fn with_max_length(input: &str, max_length: usize) -> Result<Self, CaseError> {
        if max_length > MAX_LENGTH_LIMIT {
            return Err(CaseError::MaxLengthTooLarge {
                requested: max_length,
                limit: MAX_LENGTH_LIMIT,
            });
        }
        Ok(Self::truncated(input, max_length))
    }

    fn truncated(input: &str, max_length: usize) -> Self {
        let chars: Vec<char> = input.chars().take(max_length).collect();
        let original_len = if chars.len() < max_length {
            chars.len()
        } else {
            input.chars().count()
        };
        Self {
            chars,
            original_len,
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character count of the input before truncation.
    pub fn original_len(&self) -> usize {
        self.original_len
    }

    pub fn is_truncated(&self) -> bool {
        self.original_len > self.chars.len()
    }

    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    pub(crate) fn chars_mut(&mut self) -> &mut [char] {
        &mut self.chars
    }

    /// Indices whose character has distinct upper and lower case forms.
    pub fn alphabetic_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.chars
            .iter()
            .enumerate()
            .filter(|&(_, &c)| has_case(c))
            .map(|(i, _)| i)
    }

    pub fn alphabetic_count(&self) -> usize {
        self.chars.iter().filter(|&&c| has_case(c)).count()
    }

    /// Number of variants the word expands to: 2^k for k alphabetic positions.
    pub fn variant_count(&self) -> u64 {
        1u64 << self.alphabetic_count()
    }

    /// Lazily yields every variant, in the same order as
    /// [`write_variants`](crate::write_variants).
    pub fn variants(&self) -> Variants {
        Variants::new(self)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// ASCII case model: only characters whose upper and lower forms differ branch.
pub(crate) fn has_case(c: char) -> bool {
    c.to_ascii_lowercase() != c.to_ascii_uppercase()
}
