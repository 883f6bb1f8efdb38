//! # Dish Actor
//!
//! This module implements the Dish catalog as a resource actor.
//!
//! ## Overview
//!
//! Dishes are seeded into the catalog and then only read: the order actor checks that every
//! ordered dish exists, and the kitchen views resolve dish ids to names. There are no custom
//! actions, so the catalog is the plainest actor in the system.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Dish`]
//! - [`error`] - [`DishError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use tableside::dish_actor;
//! use tableside::model::DishCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = dish_actor::new(32);
//!
//!     // No dependencies, so the context is ()
//!     tokio::spawn(actor.run(()));
//!
//!     let soup = client.add_dish(DishCreate::new("Onion soup")).await?;
//!     assert_eq!(client.list_dishes().await?, vec![soup]);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::DishClient;
use crate::model::Dish;
use resource_actor::ResourceActor;

/// Creates a new Dish actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<Dish>, DishClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, DishClient::new(generic_client))
}
