//! Read-only access to stock levels.

use std::collections::{BTreeMap, HashMap};
use std::num::NonZeroU32;

use super::stock::{check_level, AdmissionResult};

/// A read-only view of how many units of each product are available.
///
/// `None` means the ledger holds no inventory record for the product.
pub trait StockLedger {
    fn stock_level(&self, product_id: &str) -> Option<u32>;
}

impl StockLedger for HashMap<String, u32> {
    fn stock_level(&self, product_id: &str) -> Option<u32> {
        self.get(product_id).copied()
    }
}

impl StockLedger for BTreeMap<String, u32> {
    fn stock_level(&self, product_id: &str) -> Option<u32> {
        self.get(product_id).copied()
    }
}

/// Reads `product_id` from the ledger and runs the admission check on it.
pub fn admit<L: StockLedger + ?Sized>(
    ledger: &L,
    product_id: &str,
    requested: NonZeroU32,
) -> AdmissionResult {
    check_level(requested, ledger.stock_level(product_id))
}
