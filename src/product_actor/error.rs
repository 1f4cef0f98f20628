use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),
    #[error("Unexpected action result: {0}")]
    UnexpectedResult(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
