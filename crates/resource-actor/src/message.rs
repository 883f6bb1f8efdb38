//! # Generic Messages
//!
//! The message types exchanged between `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use std::fmt;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// A predicate evaluated inside the actor task against each stored entity.
///
/// Boxed so it can travel over the channel; runs while the actor holds its store, so keep it
/// cheap and free of I/O.
pub struct Filter<T>(Box<dyn Fn(&T) -> bool + Send + Sync>);

impl<T> Filter<T> {
    pub fn new(predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self(Box::new(predicate))
    }

    /// A filter that keeps every entity.
    pub fn all() -> Self {
        Self::new(|_| true)
    }

    pub fn matches(&self, item: &T) -> bool {
        (self.0)(item)
    }
}

impl<T> fmt::Debug for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Filter(..)")
    }
}

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// Every actor manages one type of resource (the [`ActorEntity`]) and answers the same small set
/// of requests:
///
/// - **Create**: Lifecycle start. Builds the entity from [`ActorEntity::Create`], runs
///   `on_create`, stores it and answers with the stored entity (id included).
/// - **Get**: Fetches the current state of one resource by ID.
/// - **List**: Returns every stored resource matching a [`Filter`], in id (creation) order.
/// - **Action**: Executes a custom [`ActorEntity::Action`]; the only way to mutate a resource.
///
/// There is deliberately no Delete: resources here are history and are never removed.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        filter: Filter<T>,
        respond_to: Response<Vec<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
