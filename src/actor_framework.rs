use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any domain entity must implement to be stored by a [`ResourceActor`].
///
/// The id is optional on the entity itself: records arriving from the outside
/// have none until the actor assigns one.
pub trait Entity: Clone + Debug + Send + Sync + 'static {
    type Id: Eq + Hash + Copy + Send + Sync + Display + Debug;

    /// Get the ID of the entity, if one has been assigned
    fn id(&self) -> Option<Self::Id>;

    /// Stamp an ID onto the entity
    fn set_id(&mut self, id: Self::Id);
}

/// Transport failures between a [`ResourceClient`] and its actor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<T>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Insert {
        item: T,
        respond_to: Response<T>,
    },
    Replace {
        id: T::Id,
        item: T,
        respond_to: Response<Option<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Exists {
        id: T::Id,
        respond_to: Response<bool>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Clear {
        respond_to: Response<()>,
    },
    Shutdown,
    #[cfg(test)]
    Count {
        respond_to: Response<usize>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Single-writer store. Every request is handled to completion before the next
/// one is received, so single-key operations never interleave.
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
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    #[instrument(name = "resource_actor", skip(self))]
    pub async fn run(mut self) {
        info!("ResourceActor starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Insert { item, respond_to } => {
                    self.handle_insert(item, respond_to);
                }
                ResourceRequest::Replace { id, item, respond_to } => {
                    self.handle_replace(id, item, respond_to);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(self.store.get(&id).cloned());
                }
                ResourceRequest::List { respond_to } => {
                    let _ = respond_to.send(self.store.values().cloned().collect());
                }
                ResourceRequest::Exists { id, respond_to } => {
                    let _ = respond_to.send(self.store.contains_key(&id));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    self.handle_delete(id, respond_to);
                }
                ResourceRequest::Clear { respond_to } => {
                    debug!(cleared = self.store.len(), "Clearing store");
                    self.store.clear();
                    let _ = respond_to.send(());
                }
                ResourceRequest::Shutdown => {
                    info!("ResourceActor shutting down");
                    break;
                }
                #[cfg(test)]
                ResourceRequest::Count { respond_to } => {
                    let _ = respond_to.send(self.store.len());
                }
            }
        }

        info!("ResourceActor stopped");
    }

    #[instrument(skip(self, item, respond_to))]
    fn handle_insert(&mut self, mut item: T, respond_to: Response<T>) {
        let id = match item.id() {
            Some(id) => id,
            None => {
                let id = (self.next_id_fn)();
                item.set_id(id);
                id
            }
        };

        if self.store.insert(id, item.clone()).is_some() {
            debug!(id = %id, "Overwrote existing entry");
        } else {
            debug!(id = %id, "Inserted new entry");
        }

        let _ = respond_to.send(item);
    }

    #[instrument(skip(self, item, respond_to))]
    fn handle_replace(&mut self, id: T::Id, mut item: T, respond_to: Response<Option<T>>) {
        let replaced = match self.store.get_mut(&id) {
            Some(slot) => {
                item.set_id(id);
                *slot = item.clone();
                Some(item)
            }
            None => {
                debug!("Nothing to replace");
                None
            }
        };

        let _ = respond_to.send(replaced);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_delete(&mut self, id: T::Id, respond_to: Response<Option<T>>) {
        let removed = self.store.remove(&id);
        if removed.is_none() {
            debug!("Nothing to delete");
        }
        let _ = respond_to.send(removed);
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
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
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    /// Stores the item, assigning the next id if it has none.
    pub async fn insert(&self, item: T) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Insert { item, respond_to })
            .await
    }

    /// Overwrites an existing entry. Returns `None` when there is nothing at `id`.
    pub async fn replace(&self, id: T::Id, item: T) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Replace { id, item, respond_to })
            .await
    }

    pub async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn find_all(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to })
            .await
    }

    pub async fn exists(&self, id: T::Id) -> Result<bool, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Exists { id, respond_to })
            .await
    }

    /// Removes the entry if present. Deleting an absent id is not an error.
    pub async fn delete(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    pub async fn clear(&self) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Clear { respond_to })
            .await
    }

    pub async fn shutdown(&self) -> Result<(), FrameworkError> {
        self.sender
            .send(ResourceRequest::Shutdown)
            .await
            .map_err(|_| FrameworkError::ActorClosed)
    }

    #[cfg(test)]
    pub async fn len(&self) -> Result<usize, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Count { respond_to })
            .await
    }
}
