//! # Resource Actor
//!
//! Building blocks for type-safe, concurrent resource actors on Tokio. Each resource type
//! (dishes, people, orders) is owned by one `ResourceActor` task that processes requests one at a
//! time, and is reached through a cloneable `ResourceClient`.
//!
//! ## Why actors for resources?
//!
//! - **Isolated state**: the store belongs to a single task; no locks, no shared memory.
//! - **Serialized writes**: two requests against the same resource can never interleave, so a
//!   "check current state, then change it" action is atomic without extra machinery.
//! - **Uniform surface**: every resource answers Create / Get / List / Action.
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - domain model, validation and actions
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and the store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed request/response
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via `run(context)`, not at construction time. An
//! entity whose creation must be validated against other resources declares those clients as its
//! `Context` and checks them in `on_create`:
//!
//! ```rust
//! use resource_actor::{ActorEntity, ResourceActor, ResourceClient};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Room { id: u32 }
//! #[derive(Debug)] struct RoomCreate;
//! #[derive(Debug)] enum RoomAction {}
//! #[derive(Debug, thiserror::Error)] #[error("room error")] struct RoomError;
//!
//! #[async_trait]
//! impl ActorEntity for Room {
//!     type Id = u32; type Create = RoomCreate; type Action = RoomAction;
//!     type ActionResult = (); type Context = (); type Error = RoomError;
//!     fn from_create_params(id: u32, _: RoomCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn handle_action(&mut self, _: RoomAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[derive(Clone, Debug)] struct Booking { id: u32, room: u32 }
//! #[derive(Debug)] struct BookingCreate { room: u32 }
//! #[derive(Debug)] enum BookingAction {}
//! #[derive(Debug, thiserror::Error)] #[error("no such room")] struct BookingError;
//!
//! #[async_trait]
//! impl ActorEntity for Booking {
//!     type Id = u32; type Create = BookingCreate; type Action = BookingAction;
//!     type ActionResult = (); type Context = ResourceClient<Room>; type Error = BookingError;
//!
//!     fn from_create_params(id: u32, p: BookingCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, room: p.room })
//!     }
//!     async fn on_create(&mut self, rooms: &ResourceClient<Room>) -> Result<(), Self::Error> {
//!         match rooms.get(self.room).await {
//!             Ok(Some(_)) => Ok(()),
//!             _ => Err(BookingError),
//!         }
//!     }
//!     async fn handle_action(&mut self, _: BookingAction, _: &ResourceClient<Room>) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (room_actor, rooms) = ResourceActor::<Room>::new(10);
//!     let (booking_actor, bookings) = ResourceActor::<Booking>::new(10);
//!
//!     tokio::spawn(room_actor.run(()));
//!     tokio::spawn(booking_actor.run(rooms.clone()));
//!
//!     let room = rooms.create(RoomCreate).await.unwrap();
//!     assert!(bookings.create(BookingCreate { room: room.id }).await.is_ok());
//!     assert!(bookings.create(BookingCreate { room: 99 }).await.is_err());
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a `ResourceClient<T>` from scripted expectations, so client
//! wrappers and actors with dependencies can be tested without spawning the real dependencies.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{Filter, ResourceRequest, Response};
