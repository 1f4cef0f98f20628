use std::num::NonZeroU32;

use tracing::{error, info, instrument, warn};
use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::clients::ProductClient;
use crate::domain::{Order, OrderCreate};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use crate::policy::{check_level, OrderStatus, TransitionResult};
use crate::product_actor::ProductError;

/// Client for interacting with the Order actor.
///
/// Runs the order workflow: validating the product, checking and reserving
/// stock before an order is stored, and guarding every status change.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    product_client: ProductClient,
    low_stock_threshold: u32,
}

impl OrderClient {
    pub fn new(
        inner: ResourceClient<Order>,
        product_client: ProductClient,
        low_stock_threshold: u32,
    ) -> Self {
        Self {
            inner,
            product_client,
            low_stock_threshold,
        }
    }

    /// Places a `pending` order for `quantity` units of a product.
    ///
    /// The stock check against the fetched product only spares the inventory
    /// actor a doomed reservation. The reservation itself re-checks the live
    /// stock level and is what prevents overselling.
    #[instrument(skip(self))]
    pub async fn place_order(
        &self,
        user_id: String,
        product_id: String,
        quantity: u32,
    ) -> Result<String, OrderError> {
        info!("Processing place_order request");
        let requested = NonZeroU32::new(quantity).ok_or(OrderError::InvalidQuantity(quantity))?;

        // Step 1: Validate product
        let product = match self.product_client.get_product(product_id.clone()).await {
            Ok(Some(product)) => {
                info!(
                    product_name = %product.name,
                    price = %product.price,
                    "Product validation successful"
                );
                product
            }
            Ok(None) => {
                error!("Product not found");
                return Err(OrderError::InvalidProduct(product_id));
            }
            Err(e) => {
                error!(error = %e, "Product validation failed");
                return Err(OrderError::ActorCommunicationError(e.to_string()));
            }
        };

        // Step 2: Pre-flight admission check
        let preflight = check_level(requested, product.stock);
        if !preflight.is_accepted() {
            warn!(verdict = ?preflight, "Pre-flight stock check rejected order");
            return Err(OrderError::StockRejected(preflight));
        }

        // Step 3: Reserve stock
        let reservation = self
            .product_client
            .reserve_stock(product_id.clone(), requested)
            .await
            .map_err(|e| match e {
                ProductError::NotFound(id) => OrderError::InvalidProduct(id),
                other => OrderError::ActorCommunicationError(other.to_string()),
            })?;
        if !reservation.verdict.is_accepted() {
            warn!(verdict = ?reservation.verdict, "Stock reservation rejected order");
            return Err(OrderError::StockRejected(reservation.verdict));
        }
        info!(remaining = ?reservation.remaining, "Stock reserved successfully");
        if let Some(remaining) = reservation.remaining {
            if remaining <= self.low_stock_threshold {
                warn!(
                    product_id = %product_id,
                    remaining,
                    threshold = self.low_stock_threshold,
                    "Low stock"
                );
            }
        }

        // Step 4: Create order
        let params = OrderCreate {
            user_id,
            product_id: product_id.clone(),
            quantity,
            total: product.price * f64::from(quantity),
        };
        match self.inner.create(params).await {
            Ok(order_id) => {
                info!(order_id = %order_id, "Order created successfully");
                Ok(order_id)
            }
            Err(e) => {
                error!(error = %e, "Order creation failed, releasing reserved stock");
                let released = self.product_client.release_stock(product_id, quantity).await;
                if let Err(release_error) = released {
                    error!(error = %release_error, "Failed to release reserved stock");
                }
                Err(OrderError::ActorCommunicationError(e.to_string()))
            }
        }
    }

    /// Moves an order to `to`, returning the updated order.
    ///
    /// The guard runs inside the order actor against the stored status. A
    /// cancel that claims the order's restock returns the units to stock. If
    /// that release fails the status change still stands: the claim goes back
    /// to the order and the returned order has `pending_restock` set, so
    /// cancelling again retries the release.
    #[instrument(skip(self))]
    pub async fn change_status(&self, id: String, to: OrderStatus) -> Result<Order, OrderError> {
        info!("Processing change_status request");
        let result = self.perform(id.clone(), OrderAction::ChangeStatus(to)).await?;

        let (verdict, previous, mut order, restock) = match result {
            OrderActionResult::StatusChange { verdict, previous, order, restock } => {
                (verdict, previous, order, restock)
            }
            other => return Err(OrderError::UnexpectedResult(format!("{:?}", other))),
        };
        if let TransitionResult::Denied { from, to } = verdict {
            warn!(%from, %to, "Status change denied");
            return Err(OrderError::TransitionDenied { from, to });
        }

        if let Some(quantity) = restock {
            match self.product_client.release_stock(order.product_id.clone(), quantity).await {
                Ok(stock) => {
                    info!(product_id = %order.product_id, stock, "Restocked cancelled order");
                }
                Err(e) => {
                    error!(error = %e, product_id = %order.product_id, "Failed to release stock");
                    match self.perform(id, OrderAction::RestockFailed).await {
                        Ok(_) => order.pending_restock = true,
                        Err(e) => error!(error = %e, "Failed to reopen restock claim"),
                    }
                }
            }
        }

        info!(%previous, status = %order.status, "Order status changed");
        Ok(order)
    }

    async fn perform(
        &self,
        id: String,
        action: OrderAction,
    ) -> Result<OrderActionResult, OrderError> {
        self.inner.perform_action(id, action).await.map_err(|e| match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        })
    }
}

client_get!(OrderClient, Order, OrderError, order);
