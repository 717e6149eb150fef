use thiserror::Error;

/// Errors from building a [`Word`](crate::Word).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CaseError {
    /// Requested maximum length exceeds what the variant counter can address.
    #[error("maximum length {requested} exceeds the supported limit of {limit} characters")]
    MaxLengthTooLarge { requested: usize, limit: usize },
}
