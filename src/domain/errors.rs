use thiserror::Error;

/// Every failure in this core is a recoverable business condition; there are
/// no fatal classes and nothing is retried automatically.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Order not found: {0}")]
    NotFound(String),
}
