use thiserror::Error;

use crate::policy::{AdmissionResult, ErrorPayload, OrderStatus, ToErrorPayload, TransitionResult};

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Invalid product: {0}")]
    InvalidProduct(String),
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),
    #[error("{}", rejection_message(.0))]
    StockRejected(AdmissionResult),
    #[error("{}", denied_message(.from, .to))]
    TransitionDenied { from: OrderStatus, to: OrderStatus },
    #[error("Unexpected action result: {0}")]
    UnexpectedResult(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    /// The client-facing payload for policy rejections; `None` for
    /// infrastructure and lookup failures.
    pub fn payload(&self) -> Option<ErrorPayload> {
        match self {
            OrderError::StockRejected(verdict) => verdict.to_error_payload(),
            OrderError::TransitionDenied { from, to } => denied(*from, *to).to_error_payload(),
            _ => None,
        }
    }
}

fn denied(from: OrderStatus, to: OrderStatus) -> TransitionResult {
    TransitionResult::Denied { from, to }
}

fn denied_message(from: &OrderStatus, to: &OrderStatus) -> String {
    rejection_message(&denied(*from, *to))
}

fn rejection_message(verdict: &impl ToErrorPayload) -> String {
    verdict
        .to_error_payload()
        .map(|payload| payload.message)
        .unwrap_or_else(|| "Policy check passed".to_string())
}
