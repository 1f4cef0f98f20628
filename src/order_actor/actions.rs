use crate::domain::Order;
use crate::policy::{OrderStatus, TransitionResult};

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order to a new status if the transition table allows it.
    ChangeStatus(OrderStatus),
    /// Reports that releasing a claimed restock failed, so the next cancel
    /// may claim it again.
    RestockFailed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    StatusChange {
        verdict: TransitionResult,
        /// Status the order held when the action arrived.
        previous: OrderStatus,
        /// The order after the action.
        order: Order,
        /// Units the caller must return to stock. Handed out at most once per
        /// cancellation until a failure is reported back.
        restock: Option<u32>,
    },
    RestockReopened,
}
