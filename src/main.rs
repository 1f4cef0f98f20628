use anyhow::Context;
use tracing::{error, info, Instrument};

use storefront_policy::app_system::{setup_tracing, OrderSystem};
use storefront_policy::config::{StorefrontConfig, DEFAULT_CONFIG_PATH};
use storefront_policy::policy::{OrderStatus, ResponseFormat};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = StorefrontConfig::load(DEFAULT_CONFIG_PATH)?;
    setup_tracing(&config.log_filter);

    info!("Starting storefront order system");
    let system = OrderSystem::new(&config);

    let product_id = system
        .product_client
        .create_product("Test Product".to_string(), 20.0, Some(6))
        .await?;
    info!(product_id = %product_id, "Product created successfully");

    let span = tracing::info_span!("order_processing");
    let order_id = async {
        info!("Placing order");
        system
            .order_client
            .place_order("user_1".to_string(), product_id.clone(), 4)
            .await
    }
    .instrument(span)
    .await?;
    info!(order_id = %order_id, "Order placed successfully");

    // A second order asks for more than is left and is rejected
    match system.order_client.place_order("user_2".to_string(), product_id.clone(), 5).await {
        Ok(order_id) => info!(order_id = %order_id, "Order placed successfully"),
        Err(e) => match e.payload() {
            Some(payload) => {
                let body = payload.render(ResponseFormat::Json)?;
                info!(status = payload.status_code(), body = %body, "Order rejected");
            }
            None => error!(error = %e, "Order processing failed"),
        },
    }

    system.order_client.change_status(order_id.clone(), OrderStatus::Paid).await?;
    let denied = system.order_client.change_status(order_id.clone(), OrderStatus::Pending).await;
    if let Err(e) = denied {
        info!(error = %e, "Status change rejected");
    }
    let order = system
        .order_client
        .change_status(order_id.clone(), OrderStatus::Cancelled)
        .await?;
    info!(status = %order.status, history = ?order.status_history, "Order cancelled");

    let stock = system.product_client.check_stock(product_id).await?;
    info!(stock = ?stock, "Stock after cancellation");

    system
        .shutdown()
        .await
        .map_err(anyhow::Error::msg)
        .context("shutting down order system")?;

    info!("Application completed successfully");
    Ok(())
}
