//! Recursive backtracking generator.
//!
//! The word buffer is walked depth-first by exclusive reference. Each
//! alphabetic position branches lowercase then uppercase; every other
//! position takes a single branch. Each frame puts its character back before
//! returning, so shallower frames see the buffer as they left it.

use std::io::{self, Write};

use tracing::debug_span;

use crate::word::{has_case, Word};

/// Writes every case variant of `word` to `sink`, one newline-terminated
/// line per variant, and returns how many lines were written.
///
/// The buffer is mutated during traversal and holds its original contents
/// again on return, including when a write fails part way through.
pub fn write_variants<W: Write>(word: &mut Word, sink: &mut W) -> io::Result<u64> {
    let span = debug_span!("write_variants", len = word.len(), alphabetic = word.alphabetic_count());
    let _enter = span.enter();

    let mut emitter = Emitter {
        sink,
        line: String::with_capacity(word.len() * 4 + 1),
        written: 0,
    };
    let chars = word.chars_mut();
    let len = chars.len();
    emitter.permute(chars, 0, len)?;
    Ok(emitter.written)
}

struct Emitter<'a, W: Write> {
    sink: &'a mut W,
    line: String,
    written: u64,
}

impl<W: Write> Emitter<'_, W> {
    fn permute(&mut self, chars: &mut [char], index: usize, len: usize) -> io::Result<()> {
        if index == len {
            return self.emit(chars);
        }

        let current = chars[index];

        chars[index] = current.to_ascii_lowercase();
        let lower = self.permute(chars, index + 1, len);

        let upper = match lower {
            Ok(()) if has_case(current) => {
                chars[index] = current.to_ascii_uppercase();
                self.permute(chars, index + 1, len)
            }
            other => other,
        };

        chars[index] = current;
        upper
    }

    fn emit(&mut self, chars: &[char]) -> io::Result<()> {
        self.line.clear();
        self.line.extend(chars);
        self.line.push('\n');
        self.sink.write_all(self.line.as_bytes())?;
        self.written += 1;
        Ok(())
    }
}
