//! Error types for the Dish actor.

use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DishError {
    /// The dish data provided is invalid.
    #[error("Dish validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for DishError {
    fn from(msg: String) -> Self {
        DishError::ActorCommunicationError(msg)
    }
}
