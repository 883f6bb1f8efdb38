//! Pure data structures. [`Dish`], [`Person`] and [`Order`] implement the
//! [`ActorEntity`](resource_actor::ActorEntity) trait; the [`view`] types are derived on read and
//! never stored.

pub mod dish;
pub mod order;
pub mod person;
pub mod view;

pub use dish::*;
pub use order::*;
pub use person::*;
pub use view::*;
