//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_action`] to assert behavior.

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

/// Creates a mock client and a receiver for asserting requests.
///
/// The test plays the actor: it reads each request from `receiver` and answers
/// through the request's oneshot sender, so success, failure, and ordering are
/// fully deterministic.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreateParams, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, oneshot::Sender<Result<T::ActionResult, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ProductClient;
    use crate::domain::Product;
    use crate::policy::AdmissionResult;
    use crate::product_actor::{ProductAction, ProductActionResult, ProductCreate};
    use std::num::NonZeroU32;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Product>(10);

        let create_task = tokio::spawn(async move {
            let params = ProductCreate { name: "Test".to_string(), price: 1.0, stock: Some(3) };
            client.create(params).await
        });

        let (params, responder) =
            expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(params.name, "Test");
        responder.send(Ok("product_1".to_string())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok("product_1".to_string()));
    }

    #[tokio::test]
    async fn test_mock_action_round_trip() {
        let (inner, mut receiver) = create_mock_client::<Product>(10);
        let client = ProductClient::new(inner);

        let reserve_task = tokio::spawn(async move {
            client.reserve_stock("product_1".into(), NonZeroU32::new(2).unwrap()).await
        });

        let (id, action, responder) =
            expect_action(&mut receiver).await.expect("Expected Action request");
        assert_eq!(id, "product_1");
        assert!(matches!(action, ProductAction::ReserveStock(qty) if qty.get() == 2));
        responder
            .send(Ok(ProductActionResult::Reservation {
                verdict: AdmissionResult::Accepted,
                remaining: Some(4),
            }))
            .unwrap();

        let reservation = reserve_task.await.unwrap().unwrap();
        assert_eq!(reservation.verdict, AdmissionResult::Accepted);
        assert_eq!(reservation.remaining, Some(4));
        assert!(receiver.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_mock_failure_reaches_caller() {
        let (inner, mut receiver) = create_mock_client::<Product>(10);
        let client = ProductClient::new(inner);

        let release_task =
            tokio::spawn(async move { client.release_stock("product_9".into(), 1).await });

        let (_, action, responder) =
            expect_action(&mut receiver).await.expect("Expected Action request");
        assert!(matches!(action, ProductAction::ReleaseStock(1)));
        responder.send(Err(FrameworkError::NotFound("product_9".into()))).unwrap();

        let err = release_task.await.unwrap().unwrap_err();
        assert_eq!(err, crate::product_actor::ProductError::NotFound("product_9".into()));
    }
}
