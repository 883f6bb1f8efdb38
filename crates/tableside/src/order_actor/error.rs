//! Error types for the Order actor.

use crate::dish_actor::DishError;
use crate::model::{DishId, OrderId, OrderStatus, PersonId};
use crate::person_actor::PersonError;
use thiserror::Error;

/// Errors that can occur during order operations.
///
/// Validation (`EmptyOrder`, `InvalidPerson`, `InvalidDish`, `MissingEstimate`), state conflicts
/// (`IllegalTransition`, `ConcurrentModification`) and `OrderNotFound` are final answers.
/// `ActorCommunicationError` and the wrapped registry/catalog errors may be transient, and
/// callers may retry them.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    /// The person placing (or owning) the order does not exist.
    #[error("Invalid person: {0}")]
    InvalidPerson(PersonId),

    /// The order references a dish that does not exist.
    #[error("Invalid dish: {0}")]
    InvalidDish(DishId),

    /// An order needs at least one dish.
    #[error("An order must contain at least one dish")]
    EmptyOrder,

    /// The target status is not the immediate successor of the current one.
    #[error("Illegal transition for {order_id}: {from} -> {to}")]
    IllegalTransition {
        order_id: OrderId,
        from: OrderStatus,
        to: OrderStatus,
    },

    /// Starting preparation requires an estimate in minutes.
    #[error("An estimate is required to start preparing {0}")]
    MissingEstimate(OrderId),

    /// The order changed since the caller last read it.
    #[error("{order_id} was modified concurrently: expected version {expected}, found {actual}")]
    ConcurrentModification {
        order_id: OrderId,
        expected: u32,
        actual: u32,
    },

    #[error(transparent)]
    Registry(#[from] PersonError),

    #[error(transparent)]
    Catalog(#[from] DishError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
