//! Entity trait implementation for the Order domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`Order`] to be managed by the generic [`resource_actor::ResourceActor`].
//!
//! Placement is validated here: `from_create_params` rejects an empty dish list before any
//! lookup, then `on_create` checks the person and every distinct dish against the injected
//! registry and catalog clients. The order is only stored if both pass.

use super::actions::OrderAction;
use super::error::OrderError;
use crate::clients::{DishClient, PersonClient};
use crate::model::{Order, OrderCreate, OrderId};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::{ActorClient, ActorEntity};
use std::collections::BTreeSet;
use tracing::debug;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Action = OrderAction;
    type ActionResult = Order;
    type Context = (PersonClient, DishClient);
    type Error = OrderError;

    /// Creates a pending Order stamped with the current time.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        if params.dish_ids.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        Ok(Order::new(
            id,
            params.person_id,
            &params.dish_ids,
            Utc::now(),
        ))
    }

    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), OrderError> {
        let (people, dishes) = ctx;

        if people.get(self.person_id).await?.is_none() {
            return Err(OrderError::InvalidPerson(self.person_id));
        }

        let mut checked = BTreeSet::new();
        for dish_id in self.dish_ids() {
            if !checked.insert(dish_id) {
                continue;
            }
            if dishes.get(dish_id).await?.is_none() {
                return Err(OrderError::InvalidDish(dish_id));
            }
        }

        debug!(order_id = %self.id, items = self.items.len(), "Order validated");
        Ok(())
    }

    /// Handles custom actions for the Order entity.
    ///
    /// # Actions
    /// - `AdvanceStatus`: applies the change and returns the updated order
    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &Self::Context,
    ) -> Result<Order, OrderError> {
        match action {
            OrderAction::AdvanceStatus(change) => {
                self.advance(change)?;
                Ok(self.clone())
            }
        }
    }
}
