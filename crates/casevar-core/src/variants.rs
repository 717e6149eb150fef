use std::iter::FusedIterator;

use crate::word::Word;

/// Lazy iterator over the case variants of a word.
///
/// Counts from 0 to 2^k - 1 over the k alphabetic positions; bit set means
/// uppercase, leftmost position is the most significant bit. Yields exactly
/// the sequence [`write_variants`](crate::write_variants) writes.
#[derive(Debug, Clone)]
pub struct Variants {
    lowered: Vec<char>,
    positions: Vec<usize>,
    next: u64,
    total: u64,
}

impl Variants {
    pub(crate) fn new(word: &Word) -> Self {
        let lowered = word
            .as_chars()
            .iter()
            .map(char::to_ascii_lowercase)
            .collect();
        Self {
            lowered,
            positions: word.alphabetic_positions().collect(),
            next: 0,
            total: word.variant_count(),
        }
    }

    fn render(&self, counter: u64) -> String {
        let mut chars = self.lowered.clone();
        let k = self.positions.len();
        for (digit, &pos) in self.positions.iter().enumerate() {
            if (counter >> (k - 1 - digit)) & 1 == 1 {
                chars[pos] = chars[pos].to_ascii_uppercase();
            }
        }
        chars.into_iter().collect()
    }
}

impl Iterator for Variants {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.next >= self.total {
            return None;
        }
        let variant = self.render(self.next);
        self.next += 1;
        Some(variant)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.total - self.next) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }

    fn nth(&mut self, n: usize) -> Option<String> {
        self.next = self.next.saturating_add(n as u64).min(self.total);
        self.next()
    }
}

impl FusedIterator for Variants {}
