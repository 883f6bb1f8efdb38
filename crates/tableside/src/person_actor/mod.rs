//! # Person Actor
//!
//! This module implements the Person registry as a resource actor.
//!
//! ## Overview
//!
//! A person is registered once when they sit down and is never changed afterwards. The registry
//! answers the one question the order engine asks of it: which table does this person sit at?
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Person`]
//! - [`error`] - [`PersonError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use tableside::person_actor;
//! use tableside::model::PersonCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = person_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let ana = client.register(PersonCreate::new("Ana", 4)).await?;
//!     assert_eq!(ana.table_number, 4);
//!     Ok(())
//! }
//! ```
//!
//! ## Key Features
//!
//! - **No dependencies**: Context = ()
//! - **Sequential ids**: handed out by the actor, so the newest person has the highest id

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::PersonClient;
use crate::model::Person;
use resource_actor::ResourceActor;

/// Creates a new Person actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<Person>, PersonClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    let client = PersonClient::new(generic_client);

    (actor, client)
}
