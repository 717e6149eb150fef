#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]

pub mod args;
pub mod error;
pub mod logging;
pub mod run;

pub use args::Args;
pub use error::CliError;
pub use run::run;
