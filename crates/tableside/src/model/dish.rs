use serde::Serialize;

use std::fmt::Display;

/// Type-safe identifier for Dishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DishId(pub u32);

impl From<u32> for DishId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for DishId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "dish_{}", self.0)
    }
}

/// A dish on the menu.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](resource_actor::ResourceActor).
///
/// Dishes are immutable once added; the order engine only ever reads their names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dish {
    pub id: DishId,
    pub name: String,
}

impl Dish {
    pub fn new(id: DishId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Payload for adding a dish to the catalog.
#[derive(Debug, Clone)]
pub struct DishCreate {
    pub name: String,
}

impl DishCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
