//! Entity trait implementation for the Person domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`Person`] to be managed by the generic [`resource_actor::ResourceActor`].
//!
//! See the trait implementation on [`Person`] for method documentation.

use super::error::PersonError;
use crate::model::{Person, PersonCreate, PersonId};
use async_trait::async_trait;
use resource_actor::ActorEntity;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Person {
    type Id = PersonId;
    type Create = PersonCreate;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ();
    type Error = PersonError;

    /// Creates a new Person from creation parameters.
    ///
    /// # Errors
    /// - `ValidationError` when the name is blank
    /// - `InvalidTableNumber` when the table number is 0
    fn from_create_params(id: PersonId, params: PersonCreate) -> Result<Self, PersonError> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(PersonError::ValidationError(
                "name must not be empty".to_string(),
            ));
        }
        if params.table_number == 0 {
            return Err(PersonError::InvalidTableNumber(params.table_number));
        }
        Ok(Self::new(id, name, params.table_number))
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), PersonError> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_person() {
        let person =
            Person::from_create_params(PersonId(3), PersonCreate::new("Ana", 4)).unwrap();
        assert_eq!(person, Person::new(PersonId(3), "Ana", 4));
    }

    #[test]
    fn test_invalid_person() {
        assert!(matches!(
            Person::from_create_params(PersonId(1), PersonCreate::new("", 4)),
            Err(PersonError::ValidationError(_))
        ));
        assert_eq!(
            Person::from_create_params(PersonId(1), PersonCreate::new("Ana", 0)),
            Err(PersonError::InvalidTableNumber(0))
        );
    }
}
