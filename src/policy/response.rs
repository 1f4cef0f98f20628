//! Maps rejected policy checks to the error payload returned to clients.
//!
//! The payload is the single source of truth: JSON clients receive it
//! serialized, HTML clients receive the same message rendered into markup.

use serde::{Deserialize, Serialize};

use super::status::OrderStatus;
use super::stock::{AdmissionResult, RejectionReason};
use super::transition::TransitionResult;

/// HTTP status used for every stock or transition rejection.
pub const UNPROCESSABLE_ENTITY: u16 = 422;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    InsufficientStock,
    InventoryUnknown,
    InvalidTransition,
}

/// Structured error body. Key names are part of the client contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub success: bool,
    pub message: String,
    pub error_type: ErrorType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_stock: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_status: Option<OrderStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_status: Option<OrderStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Json,
    Html,
}

impl ErrorPayload {
    fn new(message: String, error_type: ErrorType) -> Self {
        Self {
            success: false,
            message,
            error_type,
            available_stock: None,
            requested_quantity: None,
            current_status: None,
            requested_status: None,
        }
    }

    pub fn status_code(&self) -> u16 {
        UNPROCESSABLE_ENTITY
    }

    /// Renders the payload for the given consumer.
    pub fn render(&self, format: ResponseFormat) -> Result<String, serde_json::Error> {
        match format {
            ResponseFormat::Json => serde_json::to_string(self),
            ResponseFormat::Html => Ok(format!(
                "<div class=\"alert alert-danger\" data-error-type=\"{}\">{}</div>",
                self.error_type.as_str(),
                escape_html(&self.message)
            )),
        }
    }
}

impl ErrorType {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorType::InsufficientStock => "insufficient_stock",
            ErrorType::InventoryUnknown => "inventory_unknown",
            ErrorType::InvalidTransition => "invalid_transition",
        }
    }
}

/// Conversion of a policy outcome into an error payload. Returns `None` when
/// the outcome is not a rejection.
pub trait ToErrorPayload {
    fn to_error_payload(&self) -> Option<ErrorPayload>;
}

impl ToErrorPayload for AdmissionResult {
    fn to_error_payload(&self) -> Option<ErrorPayload> {
        let AdmissionResult::Rejected {
            reason,
            available_stock,
            requested_quantity,
        } = *self
        else {
            return None;
        };

        let mut payload = match (reason, available_stock) {
            (RejectionReason::OutOfStock, _) | (RejectionReason::InsufficientStock, Some(0)) => {
                let mut payload = ErrorPayload::new(
                    "This product is currently out of stock.".to_string(),
                    ErrorType::InsufficientStock,
                );
                payload.available_stock = Some(0);
                payload
            }
            (RejectionReason::InsufficientStock, Some(available)) => {
                let mut payload = ErrorPayload::new(
                    format!(
                        "Only {} items available in stock. You requested {}.",
                        available, requested_quantity
                    ),
                    ErrorType::InsufficientStock,
                );
                payload.available_stock = Some(available);
                payload
            }
            (RejectionReason::InventoryUnknown, _) | (RejectionReason::InsufficientStock, None) => {
                ErrorPayload::new(
                    "Stock information for this product is unavailable.".to_string(),
                    ErrorType::InventoryUnknown,
                )
            }
        };
        payload.requested_quantity = Some(requested_quantity);
        Some(payload)
    }
}

impl ToErrorPayload for TransitionResult {
    fn to_error_payload(&self) -> Option<ErrorPayload> {
        let TransitionResult::Denied { from, to } = *self else {
            return None;
        };
        let mut payload = ErrorPayload::new(
            format!("Cannot change order status from {} to {}.", from, to),
            ErrorType::InvalidTransition,
        );
        payload.current_status = Some(from);
        payload.requested_status = Some(to);
        Some(payload)
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
