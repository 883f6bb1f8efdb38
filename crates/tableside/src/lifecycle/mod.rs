//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the restaurant's actors.
//!
//! ## Wiring
//!
//! Actors are created first, without dependencies, and their dependencies are injected when they
//! are started (`run(context)`). The order actor is the only one with dependencies:
//!
//! ```rust,ignore
//! let (person_actor, person_client) = person_actor::new(capacity);
//! let (dish_actor, dish_client) = dish_actor::new(capacity);
//! let (order_actor, order_client) = order_actor::new(capacity);
//!
//! tokio::spawn(person_actor.run(()));
//! tokio::spawn(dish_actor.run(()));
//! tokio::spawn(order_actor.run((person_client.clone(), dish_client.clone())));
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of every channel
//! 2. **Actors detect closure** - `receiver.recv()` returns `None` once queued requests are done
//! 3. **Await completion** - the order actor stops first, which releases the person and dish
//!    clients it holds, and then those two actors stop
//!
//! The dependency graph is acyclic, so dropping clients is enough. Clones that outlive the
//! system (an [`OrderBoard`](crate::kitchen::OrderBoard) moved into a running feed, for example)
//! keep their actors alive until they are dropped too.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the subscriber once per process:
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```

pub mod restaurant_system;
pub mod tracing;

pub use self::restaurant_system::RestaurantSystem;
pub use self::tracing::setup_tracing;
