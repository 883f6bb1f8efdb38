//! # Order Actor
//!
//! Order-specific resource logic and entity implementation.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`]
//! - [`actions`] - [`OrderAction`], the status changes an order accepts
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! The order actor validates placements against the person registry and the dish catalog.
//! Those clients are not passed to [`new()`]; they are injected when the actor is started:
//!
//! ```rust,ignore
//! let (order_actor, order_client) = order_actor::new(32);
//! tokio::spawn(order_actor.run((person_client.clone(), dish_client.clone())));
//! ```
//!
//! ## Concurrency
//!
//! One actor task owns every order and handles one message at a time. Two staff terminals
//! advancing the same order therefore never interleave: the second request sees the status the
//! first one wrote and fails with `IllegalTransition`.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use resource_actor::ResourceActor;

/// Creates a new Order actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    let client = OrderClient::new(generic_client);

    (actor, client)
}
