//! Error types for the Person actor.

use thiserror::Error;

/// Errors that can occur during registry operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PersonError {
    /// The person data provided is invalid.
    #[error("Person validation error: {0}")]
    ValidationError(String),

    /// Tables are numbered from 1.
    #[error("Invalid table number: {0}")]
    InvalidTableNumber(u32),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for PersonError {
    fn from(msg: String) -> Self {
        PersonError::ActorCommunicationError(msg)
    }
}
