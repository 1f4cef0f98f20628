use std::num::NonZeroU32;

use crate::policy::AdmissionResult;

/// Custom actions for Product entities.
///
/// The inventory actor applies these one at a time, so a reservation's
/// admission check and its decrement can never interleave with another
/// reservation of the same product.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Re-checks admission against the live stock level and, if accepted,
    /// decrements it in the same step.
    ReserveStock(NonZeroU32),
    /// Returns previously reserved units to stock.
    ReleaseStock(u32),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    StockLevel(Option<u32>),
    Reservation {
        verdict: AdmissionResult,
        /// Stock left after the action; unchanged when rejected.
        remaining: Option<u32>,
    },
    Released { stock: u32 },
}
