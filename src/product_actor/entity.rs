use crate::actor_framework::Entity;
use crate::domain::Product;
use crate::policy::{check_level, AdmissionResult};
use super::dtos::{ProductCreate, ProductPatch};
use super::actions::{ProductAction, ProductActionResult};

impl Entity for Product {
    type Id = String;
    type CreateParams = ProductCreate;
    type Patch = ProductPatch;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;

    fn from_create_params(id: String, params: ProductCreate) -> Result<Self, String> {
        if !params.price.is_finite() || params.price < 0.0 {
            return Err(format!("Invalid price: {}", params.price));
        }
        Ok(Self {
            id,
            name: params.name,
            price: params.price,
            stock: params.stock,
        })
    }

    /// Updates the product's price and/or stock level.
    fn on_update(&mut self, patch: ProductPatch) -> Result<(), String> {
        if let Some(price) = patch.price {
            if !price.is_finite() || price < 0.0 {
                return Err(format!("Invalid price: {}", price));
            }
            self.price = price;
        }
        if let Some(stock) = patch.stock {
            self.stock = Some(stock);
        }
        Ok(())
    }

    /// Handles product-specific actions.
    ///
    /// # Errors
    /// Releasing stock into a product without an inventory record fails.
    fn handle_action(&mut self, action: ProductAction) -> Result<ProductActionResult, String> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::StockLevel(self.stock)),
            ProductAction::ReserveStock(requested) => {
                let verdict = check_level(requested, self.stock);
                if let (AdmissionResult::Accepted, Some(stock)) = (verdict, self.stock.as_mut()) {
                    *stock -= requested.get();
                }
                Ok(ProductActionResult::Reservation {
                    verdict,
                    remaining: self.stock,
                })
            }
            ProductAction::ReleaseStock(amount) => match self.stock.as_mut() {
                Some(stock) => {
                    *stock = stock.saturating_add(amount);
                    Ok(ProductActionResult::Released { stock: *stock })
                }
                None => Err(format!("No inventory record for product {}", self.id)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::RejectionReason;
    use std::num::NonZeroU32;

    fn product(stock: Option<u32>) -> Product {
        Product::new("product_1", "Widget", 10.0, stock)
    }

    fn reserve(n: u32) -> ProductAction {
        ProductAction::ReserveStock(NonZeroU32::new(n).unwrap())
    }

    #[test]
    fn reservation_decrements_only_when_accepted() {
        let mut widget = product(Some(3));

        let result = widget.handle_action(reserve(2)).unwrap();
        assert_eq!(
            result,
            ProductActionResult::Reservation {
                verdict: AdmissionResult::Accepted,
                remaining: Some(1),
            }
        );

        let result = widget.handle_action(reserve(2)).unwrap();
        match result {
            ProductActionResult::Reservation { verdict, remaining } => {
                assert_eq!(verdict.reason(), Some(RejectionReason::InsufficientStock));
                assert_eq!(remaining, Some(1));
            }
            other => panic!("Unexpected result: {:?}", other),
        }
        assert_eq!(widget.stock, Some(1));
    }

    #[test]
    fn reservation_without_inventory_record_fails_closed() {
        let mut widget = product(None);
        let result = widget.handle_action(reserve(1)).unwrap();
        match result {
            ProductActionResult::Reservation { verdict, remaining } => {
                assert_eq!(verdict.reason(), Some(RejectionReason::InventoryUnknown));
                assert_eq!(remaining, None);
            }
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn release_restores_stock() {
        let mut widget = product(Some(0));
        assert_eq!(
            widget.handle_action(ProductAction::ReleaseStock(4)).unwrap(),
            ProductActionResult::Released { stock: 4 }
        );
        assert!(product(None).handle_action(ProductAction::ReleaseStock(1)).is_err());
    }

    #[test]
    fn rejects_negative_price() {
        let params = ProductCreate { name: "Broken".into(), price: -1.0, stock: Some(1) };
        assert!(Product::from_create_params("product_1".into(), params).is_err());

        let mut widget = product(Some(1));
        let patch = ProductPatch { price: Some(f64::NAN), stock: None };
        assert!(widget.on_update(patch).is_err());
        assert_eq!(widget.price, 10.0);
    }
}
