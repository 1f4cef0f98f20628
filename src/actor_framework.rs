use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, DTOs, and Actions)
// =============================================================================

/// Trait that any stored entity must implement to be managed by [`ResourceActor`].
///
/// The actor handles one request at a time, so every hook and action runs with
/// exclusive access to the stored entity.
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type CreateParams: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;

    // --- Custom Actions ---
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;

    /// Construct the full Entity from the ID and creation parameters
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, String>;

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), String> {
        Ok(())
    }
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), String>;
    fn on_delete(&self) -> Result<(), String> {
        Ok(())
    }

    // --- Action Handler ---

    /// Handle a custom domain-specific action
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, String>;
}

/// Failures raised by the actor infrastructure itself, as opposed to domain outcomes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity hook rejected request: {0}")]
    Hook(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs until every client has been dropped.
    #[instrument(name = "resource_actor", skip(self), fields(entity = std::any::type_name::<T>()))]
    pub async fn run(mut self) {
        info!("Resource actor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(self.handle_create(params));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.store.get(&id).cloned()));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let _ = respond_to.send(self.handle_update(id, patch));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.handle_delete(id));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let _ = respond_to.send(self.handle_action(id, action));
                }
            }
        }
        info!("Resource actor stopped");
    }

    fn handle_create(&mut self, params: T::CreateParams) -> Result<T::Id, FrameworkError> {
        let id = (self.next_id_fn)();
        let mut item = T::from_create_params(id.clone(), params).map_err(FrameworkError::Hook)?;
        item.on_create().map_err(FrameworkError::Hook)?;
        self.store.insert(id.clone(), item);
        debug!(%id, "Item created");
        Ok(id)
    }

    fn handle_update(&mut self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        let item = self
            .store
            .get_mut(&id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.on_update(patch).map_err(FrameworkError::Hook)?;
        Ok(item.clone())
    }

    fn handle_delete(&mut self, id: T::Id) -> Result<(), FrameworkError> {
        let item = self
            .store
            .get(&id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.on_delete().map_err(FrameworkError::Hook)?;
        self.store.remove(&id);
        Ok(())
    }

    fn handle_action(
        &mut self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        match self.store.get_mut(&id) {
            Some(item) => item.handle_action(action).map_err(FrameworkError::Hook),
            None => {
                warn!(%id, "Action on unknown item");
                Err(FrameworkError::NotFound(id.to_string()))
            }
        }
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

// Derive would demand `T: Clone` bounds on the id and payload types too.
impl<T: Entity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T::Id, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to })
            .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action { id, action, respond_to })
            .await
    }
}

/// Sequential string ids such as `product_1`, `product_2`, ...
pub fn sequential_ids(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = std::sync::atomic::AtomicU64::new(1);
    move || {
        let id = counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        format!("{}_{}", prefix, id)
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        id: String,
        value: u32,
        locked: bool,
    }

    #[derive(Debug)]
    struct CounterCreate {
        value: u32,
    }

    #[derive(Debug)]
    enum CounterAction {
        Increment,
        Lock,
    }

    impl Entity for Counter {
        type Id = String;
        type CreateParams = CounterCreate;
        type Patch = u32;
        type Action = CounterAction;
        type ActionResult = u32;

        fn from_create_params(id: String, params: CounterCreate) -> Result<Self, String> {
            Ok(Self {
                id,
                value: params.value,
                locked: false,
            })
        }

        fn on_update(&mut self, patch: u32) -> Result<(), String> {
            if self.locked {
                return Err("locked".to_string());
            }
            self.value = patch;
            Ok(())
        }

        fn on_delete(&self) -> Result<(), String> {
            if self.locked {
                Err("locked".to_string())
            } else {
                Ok(())
            }
        }

        fn handle_action(&mut self, action: CounterAction) -> Result<u32, String> {
            match action {
                CounterAction::Increment => {
                    self.value += 1;
                    Ok(self.value)
                }
                CounterAction::Lock => {
                    self.locked = true;
                    Ok(self.value)
                }
            }
        }
    }

    #[tokio::test]
    async fn test_resource_actor_with_actions() {
        let (actor, client) = ResourceActor::<Counter>::new(10, sequential_ids("counter"));
        tokio::spawn(actor.run());

        let id = client.create(CounterCreate { value: 1 }).await.unwrap();
        assert_eq!(id, "counter_1");

        let value = client.perform_action(id.clone(), CounterAction::Increment).await.unwrap();
        assert_eq!(value, 2);

        let stored = client.get(id.clone()).await.unwrap().unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.value, 2);

        let updated = client.update(id.clone(), 10).await.unwrap();
        assert_eq!(updated.value, 10);
    }

    #[tokio::test]
    async fn test_hooks_can_veto_update_and_delete() {
        let (actor, client) = ResourceActor::<Counter>::new(10, sequential_ids("counter"));
        tokio::spawn(actor.run());

        let id = client.create(CounterCreate { value: 1 }).await.unwrap();
        client.perform_action(id.clone(), CounterAction::Lock).await.unwrap();

        let err = client.update(id.clone(), 5).await.unwrap_err();
        assert_eq!(err, FrameworkError::Hook("locked".to_string()));
        let err = client.delete(id.clone()).await.unwrap_err();
        assert_eq!(err, FrameworkError::Hook("locked".to_string()));
        assert!(client.get(id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_unknown_id_reports_not_found() {
        let (actor, client) = ResourceActor::<Counter>::new(10, sequential_ids("counter"));
        tokio::spawn(actor.run());

        assert_eq!(client.get("missing".to_string()).await.unwrap(), None);
        let err = client
            .perform_action("missing".to_string(), CounterAction::Increment)
            .await
            .unwrap_err();
        assert_eq!(err, FrameworkError::NotFound("missing".to_string()));
    }

    #[tokio::test]
    async fn test_closed_actor_is_reported() {
        let (actor, client) = ResourceActor::<Counter>::new(10, sequential_ids("counter"));
        drop(actor);

        let err = client.create(CounterCreate { value: 1 }).await.unwrap_err();
        assert_eq!(err, FrameworkError::ActorClosed);
    }
}
