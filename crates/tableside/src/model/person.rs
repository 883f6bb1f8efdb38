use serde::Serialize;
use std::fmt::Display;

/// Type-safe identifier for People.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PersonId(pub u32);

impl From<u32> for PersonId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "person_{}", self.0)
    }
}

/// A diner seated at a table for one dining session.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](resource_actor::ResourceActor).
///
/// A person is registered once and never changed afterwards; orders reach their table
/// through `table_number`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub table_number: u32,
}

/// Payload for registering a person at a table.
#[derive(Debug, Clone)]
pub struct PersonCreate {
    pub name: String,
    pub table_number: u32,
}

impl PersonCreate {
    pub fn new(name: impl Into<String>, table_number: u32) -> Self {
        Self {
            name: name.into(),
            table_number,
        }
    }
}

impl Person {
    /// Creates a new Person instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (set by the actor system)
    /// * `name` - Diner's display name
    /// * `table_number` - Table the diner is seated at
    pub fn new(id: PersonId, name: impl Into<String>, table_number: u32) -> Self {
        Self {
            id,
            name: name.into(),
            table_number,
        }
    }
}
