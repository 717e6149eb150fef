#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]

//! Enumerates the case variants of a word.
//!
//! A variant is one assignment of upper or lower case to every ASCII letter
//! of the word; everything else is carried through unchanged. Variants are
//! produced in "lowercase first" depth-first order, which is the same as
//! counting in binary over the letter positions with the leftmost letter as
//! the most significant digit.

mod error;
mod generator;
mod variants;
mod word;

pub use error::CaseError;
pub use generator::write_variants;
pub use variants::Variants;
pub use word::{Word, MAX_LENGTH, MAX_LENGTH_LIMIT};
