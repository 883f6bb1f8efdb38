//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every resource (Dish, Person, Order) implements to be
//! managed by the generic `ResourceActor`. It names the associated types for ids, creation
//! payloads, actions, context and errors, and provides the two hooks the actor calls:
//! `on_create` (validation against other actors before the entity is stored) and
//! `handle_action` (the only way a stored entity is mutated).
//!
//! Resources in this system are append-only: there is no generic update or delete. Anything that
//! changes a stored entity is a domain action, so the entity decides which changes are legal.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` so hooks can await other actors. The `Context` type is injected
/// into every hook at `run()` time ("late binding"), which lets an order actor validate against
/// the person and dish actors without those clients existing at construction time.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    ///
    /// Ids are generated from a sequential `u32` counter and kept in an ordered map, so iterating
    /// the store yields entities in creation order.
    type Id: Ord + Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g. `AdvanceStatus`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One error enum per actor. It crosses the channel boxed inside
    /// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError) and is recovered by
    /// the typed client with a downcast.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    /// Called synchronously before `on_create`; reject malformed payloads here.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction and before the entity is stored.
    /// Returning an error discards the entity; nothing is recorded.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a custom resource-specific action against the stored entity.
    ///
    /// The actor hands out `&mut self` only for the duration of this call and processes one
    /// message at a time, so the read-check-write inside an action is never interleaved with
    /// another action on the same store.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
