//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: `Actor started` / `Shutdown`, with the entity type and final store size
//! - **Entity operations**: Create, Get, List and Action, keyed by `%id`
//! - **Client calls**: every domain client method runs in its own `#[instrument]` span
//! - **Feeds**: start, stop, published snapshots and failed polls
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO place_order: Created entity_type="Order" id=order_1 size=1
//! INFO place_order: Order placed order_id=order_1 person_id=person_1
//! INFO advance_status: Action ok entity_type="Order" id=order_1
//! INFO advance_status: Status advanced order_id=order_1 status=InPreparation version=1
//! ```
//!
//! **With `RUST_LOG=debug`** the placement also shows the validation round trips made from the
//! order actor's `on_create`:
//!
//! ```text
//! DEBUG Create entity_type="Order" params=OrderCreate { person_id: PersonId(1), dish_ids: [DishId(7), DishId(7)] }
//! DEBUG get: Get entity_type="Person" id=person_1 found=true
//! DEBUG get: Get entity_type="Dish" id=dish_7 found=true
//! DEBUG Order validated order_id=order_1 items=2
//! ```

use tracing_subscriber::EnvFilter;

/// Installs a compact `fmt` subscriber.
///
/// The filter comes from `RUST_LOG`; when that is unset or invalid, `default_filter` is used
/// (normally [`RestaurantConfig::log_filter`](crate::config::RestaurantConfig::log_filter)).
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type carries the useful part
        .compact()
        .init();
}
