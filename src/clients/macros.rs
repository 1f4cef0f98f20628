//! Per-operation generators for the plain store calls a client exposes.
//!
//! Each client opts into exactly the operations that are safe for its entity.
//! Orders only get a lookup: removing one has to go through the status guard
//! and the stock release, which a raw delete would skip.

/// `new(inner)` for clients whose only field is the resource client.
macro_rules! client_new {
    ($client:ident, $entity:ty) => {
        impl $client {
            pub fn new(inner: $crate::actor_framework::ResourceClient<$entity>) -> Self {
                Self { inner }
            }
        }
    };
}

/// `get_<name>(id)`: the stored record, or `Ok(None)` for an unknown id.
macro_rules! client_get {
    ($client:ident, $entity:ty, $error:ty, $name:ident) => {
        paste::paste! {
            impl $client {
                #[tracing::instrument(skip(self))]
                pub async fn [<get_ $name>](&self, id: String) -> Result<Option<$entity>, $error> {
                    tracing::debug!("Sending request");
                    self.inner
                        .get(id)
                        .await
                        .map_err(|e| <$error>::ActorCommunicationError(e.to_string()))
                }
            }
        }
    };
}

/// `delete_<name>(id)`: removes the record; an unknown id is `NotFound`.
macro_rules! client_delete {
    ($client:ident, $error:ty, $name:ident) => {
        paste::paste! {
            impl $client {
                #[tracing::instrument(skip(self))]
                pub async fn [<delete_ $name>](&self, id: String) -> Result<(), $error> {
                    tracing::debug!("Sending request");
                    self.inner.delete(id).await.map_err(|e| match e {
                        $crate::actor_framework::FrameworkError::NotFound(id) => {
                            <$error>::NotFound(id)
                        }
                        other => <$error>::ActorCommunicationError(other.to_string()),
                    })
                }
            }
        }
    };
}
