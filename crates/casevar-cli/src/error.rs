use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read input: end of input before a word was entered")]
    EndOfInput,
    #[error("Failed to set up logging: {0}")]
    Logging(String),
}
