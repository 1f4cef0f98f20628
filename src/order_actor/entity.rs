use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate};
use crate::policy::{can_transition, OrderStatus};
use super::actions::{OrderAction, OrderActionResult};

impl Entity for Order {
    type Id = String;
    type CreateParams = OrderCreate;
    type Patch = (); // Status only changes through the guarded action
    type Action = OrderAction;
    type ActionResult = OrderActionResult;

    /// Creates a new Order from creation parameters.
    ///
    /// The order is initialized with status `pending`.
    fn from_create_params(id: String, params: OrderCreate) -> Result<Self, String> {
        if params.quantity == 0 {
            return Err("Order quantity must be at least 1".to_string());
        }
        Ok(Self {
            id,
            user_id: params.user_id,
            product_id: params.product_id,
            quantity: params.quantity,
            total: params.total,
            status: OrderStatus::Pending,
            status_history: Vec::new(),
            pending_restock: false,
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }

    /// Applies a status change only when the transition guard allows it.
    ///
    /// Cancelling marks the order's units as owed to stock. Any cancel that
    /// finds them owed claims the restock, so concurrent cancels never
    /// release the same units twice.
    fn handle_action(&mut self, action: OrderAction) -> Result<OrderActionResult, String> {
        match action {
            OrderAction::ChangeStatus(to) => {
                let previous = self.status;
                let verdict = can_transition(previous, to);
                if verdict.is_allowed() && previous != to {
                    self.status_history.push(previous);
                    self.status = to;
                    if to == OrderStatus::Cancelled {
                        self.pending_restock = true;
                    }
                }
                let claims_restock =
                    verdict.is_allowed() && to == OrderStatus::Cancelled && self.pending_restock;
                let restock = if claims_restock {
                    self.pending_restock = false;
                    Some(self.quantity)
                } else {
                    None
                };
                Ok(OrderActionResult::StatusChange {
                    verdict,
                    previous,
                    order: self.clone(),
                    restock,
                })
            }
            OrderAction::RestockFailed => {
                if self.status != OrderStatus::Cancelled {
                    return Err(format!("Order {} is not cancelled", self.id));
                }
                self.pending_restock = true;
                Ok(OrderActionResult::RestockReopened)
            }
        }
    }
}
