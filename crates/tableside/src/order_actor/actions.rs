//! Custom actions for the Order actor.
//!
//! Status changes are the only mutation an order accepts after placement. They are handled by
//! [`ActorEntity::handle_action`](resource_actor::ActorEntity::handle_action), which applies
//! them through [`Order::advance`](crate::model::Order::advance).

use crate::model::StatusChange;

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order one step along its lifecycle.
    ///
    /// # Errors
    /// Fails without touching the order when the version is stale, the target is not the
    /// immediate successor, or an estimate is missing when preparation starts.
    ///
    /// Returns the order as stored after the change.
    AdvanceStatus(StatusChange),
}
