use serde::{Deserialize, Serialize};

use super::status::OrderStatus;

/// Outcome of asking whether an order may move between two statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionResult {
    Allowed,
    Denied { from: OrderStatus, to: OrderStatus },
}

impl TransitionResult {
    pub fn is_allowed(&self) -> bool {
        matches!(self, TransitionResult::Allowed)
    }
}

/// Checks a proposed status change against the transition table.
///
/// Re-applying the current status is always allowed. Terminal statuses allow
/// nothing else.
pub fn can_transition(from: OrderStatus, to: OrderStatus) -> TransitionResult {
    if from == to || from.successors().contains(&to) {
        TransitionResult::Allowed
    } else {
        TransitionResult::Denied { from, to }
    }
}
