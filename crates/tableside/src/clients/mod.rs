//! Type-safe wrappers around [`ResourceClient`](resource_actor::ResourceClient).
//!
//! Each wrapper implements [`ActorClient`](resource_actor::ActorClient), so `get` and `list` come
//! for free, and turns [`FrameworkError`](resource_actor::FrameworkError)s back into its actor's
//! own error enum.

pub mod dish_client;
pub mod order_client;
pub mod person_client;

pub use dish_client::*;
pub use order_client::*;
pub use person_client::*;
