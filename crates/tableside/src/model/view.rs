//! Read-side shapes handed to kitchen displays and diners.
//!
//! Built fresh from the stores on every read by [`OrderBoard`](crate::kitchen::OrderBoard).
//! They derive `Serialize` so a transport layer can emit them as they are.

use crate::model::{DishId, OrderId, OrderStatus, PersonId};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One ordered dish with its name resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DishLine {
    pub dish_id: DishId,
    pub name: String,
}

/// An order with its table and dish names resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDetails {
    pub order_id: OrderId,
    pub person_id: PersonId,
    pub table_number: u32,
    pub status: OrderStatus,
    pub estimated_minutes: Option<u32>,
    pub placed_at: DateTime<Utc>,
    /// Placement order, duplicates kept.
    pub dishes: Vec<DishLine>,
}

/// The active orders of one table, earliest first. Never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub table_number: u32,
    pub orders: Vec<OrderDetails>,
}
