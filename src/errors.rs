use rust_decimal::Decimal;
use thiserror::Error;

/// Caller-supplied values that violate the ledger contract. Recoverable: the
/// caller corrects the input and retries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("amount must be greater than zero, got {0}")]
    NonPositiveAmount(Decimal),
    #[error("unrecognized category `{0}`")]
    UnknownCategory(String),
    #[error("unrecognized filter `{0}`, expected `all` or a category name")]
    UnknownFilter(String),
}

/// Failures of the storage medium on a read or write.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt payload: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
    #[error("persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}
