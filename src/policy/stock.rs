use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Why a requested quantity was not admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    OutOfStock,
    InsufficientStock,
    /// No inventory record exists for the product.
    InventoryUnknown,
}

/// Outcome of a stock admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdmissionResult {
    Accepted,
    Rejected {
        reason: RejectionReason,
        /// `None` only when the reason is [`RejectionReason::InventoryUnknown`].
        available_stock: Option<u32>,
        requested_quantity: u32,
    },
}

impl AdmissionResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, AdmissionResult::Accepted)
    }

    pub fn reason(&self) -> Option<RejectionReason> {
        match self {
            AdmissionResult::Accepted => None,
            AdmissionResult::Rejected { reason, .. } => Some(*reason),
        }
    }
}

/// Admits `requested` units against `available` stock.
///
/// Advisory only: nothing is reserved. Whoever decrements stock must re-run
/// this check in the same serialized step as the decrement.
pub fn check(requested: NonZeroU32, available: u32) -> AdmissionResult {
    let requested = requested.get();
    if available == 0 {
        AdmissionResult::Rejected {
            reason: RejectionReason::OutOfStock,
            available_stock: Some(0),
            requested_quantity: requested,
        }
    } else if requested > available {
        AdmissionResult::Rejected {
            reason: RejectionReason::InsufficientStock,
            available_stock: Some(available),
            requested_quantity: requested,
        }
    } else {
        AdmissionResult::Accepted
    }
}

/// Like [`check`], but fails closed when the stock level is unknown.
pub fn check_level(requested: NonZeroU32, level: Option<u32>) -> AdmissionResult {
    match level {
        Some(available) => check(requested, available),
        None => AdmissionResult::Rejected {
            reason: RejectionReason::InventoryUnknown,
            available_stock: None,
            requested_quantity: requested.get(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qty(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn accepts_iff_requested_fits() {
        for requested in 1..=12 {
            for available in 0..=12 {
                assert_eq!(
                    check(qty(requested), available).is_accepted(),
                    requested <= available,
                    "requested {requested}, available {available}"
                );
            }
        }
    }

    #[test]
    fn zero_stock_is_out_of_stock_for_any_quantity() {
        for requested in [1, 2, 50, u32::MAX] {
            assert_eq!(check(qty(requested), 0).reason(), Some(RejectionReason::OutOfStock));
        }
    }

    #[test]
    fn insufficient_stock_carries_both_quantities() {
        assert_eq!(
            check(qty(5), 3),
            AdmissionResult::Rejected {
                reason: RejectionReason::InsufficientStock,
                available_stock: Some(3),
                requested_quantity: 5,
            }
        );
    }

    #[test]
    fn exact_stock_is_accepted() {
        assert_eq!(check(qty(3), 3), AdmissionResult::Accepted);
    }

    #[test]
    fn unknown_level_fails_closed() {
        assert_eq!(
            check_level(qty(1), None),
            AdmissionResult::Rejected {
                reason: RejectionReason::InventoryUnknown,
                available_stock: None,
                requested_quantity: 1,
            }
        );
        assert!(check_level(qty(2), Some(2)).is_accepted());
    }

    #[test]
    fn repeated_checks_agree() {
        assert_eq!(check(qty(4), 2), check(qty(4), 2));
        assert_eq!(check_level(qty(4), None), check_level(qty(4), None));
    }
}
