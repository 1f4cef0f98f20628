use tracing::{error, info, instrument};
use crate::actor_framework::{sequential_ids, ResourceActor};
use crate::clients::{OrderClient, ProductClient};
use crate::config::StorefrontConfig;
use crate::domain::{Order, Product};

/// The storefront system that owns the inventory and order actors.
///
/// Starts the actors, wires the clients together, and handles shutdown.
pub struct OrderSystem {
    pub order_client: OrderClient,
    pub product_client: ProductClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Must be called from within a tokio runtime.
    #[instrument(name = "order_system", skip(config))]
    pub fn new(config: &StorefrontConfig) -> Self {
        info!("Starting order system");

        // Inventory first: the order workflow depends on it
        let (product_actor, product_resource_client) =
            ResourceActor::<Product>::new(config.channel_buffer, sequential_ids("product"));
        let product_client = ProductClient::new(product_resource_client);
        let product_handle = tokio::spawn(product_actor.run());

        let (order_actor, order_resource_client) =
            ResourceActor::<Order>::new(config.channel_buffer, sequential_ids("order"));
        let order_client = OrderClient::new(
            order_resource_client,
            product_client.clone(),
            config.low_stock_threshold,
        );
        let order_handle = tokio::spawn(order_actor.run());

        info!("Order system started successfully");
        Self {
            order_client,
            product_client,
            handles: vec![product_handle, order_handle],
        }
    }

    /// Drops the clients held here and waits for the actors to drain.
    ///
    /// Actors stop once every clone of their client is gone, so callers must
    /// drop any clients they cloned before awaiting this.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down order system");
        drop(self.order_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Order system shutdown complete");
        Ok(())
    }
}
