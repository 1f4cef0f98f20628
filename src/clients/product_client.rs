use std::num::NonZeroU32;

use tracing::{debug, instrument};
use crate::domain::Product;
use crate::product_actor::{
    ProductAction, ProductActionResult, ProductCreate, ProductError, ProductPatch,
};
use crate::actor_framework::ResourceClient;
use crate::policy::AdmissionResult;

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

client_new!(ProductClient, Product);
client_get!(ProductClient, Product, ProductError, product);
client_delete!(ProductClient, ProductError, product);

/// A reservation verdict together with the stock left afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reservation {
    pub verdict: AdmissionResult,
    pub remaining: Option<u32>,
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(
        &self,
        name: String,
        price: f64,
        stock: Option<u32>,
    ) -> Result<String, ProductError> {
        debug!("Sending request");
        let params = ProductCreate { name, price, stock };
        self.inner
            .create(params)
            .await
            .map_err(|e| ProductError::ActorCommunicationError(e.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: String,
        patch: ProductPatch,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner
            .update(id, patch)
            .await
            .map_err(|e| ProductError::ActorCommunicationError(e.to_string()))
    }

    /// Current stock level; `Ok(None)` when the product has no inventory record.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: String) -> Result<Option<u32>, ProductError> {
        debug!("Sending request");
        match self.perform(id, ProductAction::CheckStock).await? {
            ProductActionResult::StockLevel(level) => Ok(level),
            other => Err(ProductError::UnexpectedResult(format!("{:?}", other))),
        }
    }

    /// Atomically re-checks and reserves stock inside the inventory actor.
    #[instrument(skip(self))]
    pub async fn reserve_stock(
        &self,
        id: String,
        quantity: NonZeroU32,
    ) -> Result<Reservation, ProductError> {
        debug!("Sending request");
        match self.perform(id, ProductAction::ReserveStock(quantity)).await? {
            ProductActionResult::Reservation { verdict, remaining } => {
                Ok(Reservation { verdict, remaining })
            }
            other => Err(ProductError::UnexpectedResult(format!("{:?}", other))),
        }
    }

    #[instrument(skip(self))]
    pub async fn release_stock(&self, id: String, quantity: u32) -> Result<u32, ProductError> {
        debug!("Sending request");
        match self.perform(id, ProductAction::ReleaseStock(quantity)).await? {
            ProductActionResult::Released { stock } => Ok(stock),
            other => Err(ProductError::UnexpectedResult(format!("{:?}", other))),
        }
    }

    async fn perform(
        &self,
        id: String,
        action: ProductAction,
    ) -> Result<ProductActionResult, ProductError> {
        use crate::actor_framework::FrameworkError;
        self.inner.perform_action(id, action).await.map_err(|e| match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            other => ProductError::ActorCommunicationError(other.to_string()),
        })
    }
}
