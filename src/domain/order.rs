use crate::policy::OrderStatus;

/// Represents a customer order for a single product line.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub product_id: String,
    pub quantity: u32,
    pub total: f64,
    pub status: OrderStatus,
    /// Statuses the order held before the current one, oldest first.
    pub status_history: Vec<OrderStatus>,
    /// Set while a cancelled order's units are owed to stock and nobody
    /// holds the claim to release them. A failed release sets it again.
    pub pending_restock: bool,
}

/// Payload for placing a new order. The total is priced by the order workflow.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub user_id: String,
    pub product_id: String,
    pub quantity: u32,
    pub total: f64,
}

impl Order {
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        product_id: impl Into<String>,
        quantity: u32,
        total: f64,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            product_id: product_id.into(),
            quantity,
            total,
            status: OrderStatus::Pending,
            status_history: Vec::new(),
            pending_restock: false,
        }
    }
}
