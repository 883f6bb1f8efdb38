use crate::model::{DishId, PersonId};
use crate::order_actor::OrderError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Where an order is in the kitchen.
///
/// The only legal path is `Pending -> InPreparation -> Finalized`, one step at a time.
/// [`OrderStatus::successor`] is the transition table; every status write goes through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    InPreparation,
    Finalized,
}

impl OrderStatus {
    /// The single status this one may move to, `None` for the terminal status.
    pub fn successor(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::InPreparation),
            OrderStatus::InPreparation => Some(OrderStatus::Finalized),
            OrderStatus::Finalized => None,
        }
    }

    pub fn can_advance_to(self, target: OrderStatus) -> bool {
        self.successor() == Some(target)
    }

    /// Active orders are the ones the kitchen still has to deal with.
    pub fn is_active(self) -> bool {
        self != OrderStatus::Finalized
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InPreparation => "InPreparation",
            OrderStatus::Finalized => "Finalized",
        };
        f.write_str(label)
    }
}

/// One dish line of an order. The same dish may appear on several lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderItem {
    pub order_id: OrderId,
    pub dish_id: DishId,
}

/// A placed order.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](resource_actor::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Status changes ([`OrderAction`](crate::order_actor::OrderAction))
///
/// `items` is fixed at creation. Only `status`, `estimated_minutes` and `version` ever change,
/// and only through [`Order::advance`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub person_id: PersonId,
    pub status: OrderStatus,
    /// Minutes until ready. Set when preparation starts and kept after finalization.
    pub estimated_minutes: Option<u32>,
    pub placed_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
    /// Number of status changes applied so far.
    pub version: u32,
}

/// Payload for placing a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub person_id: PersonId,
    /// One entry per line, in the order the diner picked them. Duplicates are separate lines.
    pub dish_ids: Vec<DishId>,
}

impl OrderCreate {
    pub fn new(person_id: PersonId, dish_ids: impl IntoIterator<Item = DishId>) -> Self {
        Self {
            person_id,
            dish_ids: dish_ids.into_iter().collect(),
        }
    }
}

/// A requested status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub target: OrderStatus,
    /// Required when `target` is `InPreparation`; ignored when it is `Finalized`.
    pub estimated_minutes: Option<u32>,
    /// When set, the change only applies if the order is still at this version.
    pub expected_version: Option<u32>,
}

impl StatusChange {
    pub fn to(target: OrderStatus) -> Self {
        Self {
            target,
            estimated_minutes: None,
            expected_version: None,
        }
    }

    pub fn with_estimate(mut self, minutes: u32) -> Self {
        self.estimated_minutes = Some(minutes);
        self
    }

    pub fn expecting_version(mut self, version: u32) -> Self {
        self.expected_version = Some(version);
        self
    }
}

impl Order {
    /// Creates a pending order with one item per dish id.
    pub fn new(
        id: OrderId,
        person_id: PersonId,
        dish_ids: &[DishId],
        placed_at: DateTime<Utc>,
    ) -> Self {
        let items = dish_ids
            .iter()
            .map(|&dish_id| OrderItem {
                order_id: id,
                dish_id,
            })
            .collect();
        Self {
            id,
            person_id,
            status: OrderStatus::Pending,
            estimated_minutes: None,
            placed_at,
            items,
            version: 0,
        }
    }

    pub fn dish_ids(&self) -> impl Iterator<Item = DishId> + '_ {
        self.items.iter().map(|item| item.dish_id)
    }

    /// Applies a status change or rejects it, leaving the order untouched on error.
    ///
    /// Checks run in this order: version (when the caller pinned one), transition legality,
    /// then the estimate.
    pub fn advance(&mut self, change: StatusChange) -> Result<(), OrderError> {
        if let Some(expected) = change.expected_version {
            if expected != self.version {
                return Err(OrderError::ConcurrentModification {
                    order_id: self.id,
                    expected,
                    actual: self.version,
                });
            }
        }

        if !self.status.can_advance_to(change.target) {
            return Err(OrderError::IllegalTransition {
                order_id: self.id,
                from: self.status,
                to: change.target,
            });
        }

        if change.target == OrderStatus::InPreparation {
            let minutes = change
                .estimated_minutes
                .ok_or(OrderError::MissingEstimate(self.id))?;
            self.estimated_minutes = Some(minutes);
        }

        self.status = change.target;
        self.version += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [OrderStatus; 3] = [
        OrderStatus::Pending,
        OrderStatus::InPreparation,
        OrderStatus::Finalized,
    ];

    fn pending_order() -> Order {
        Order::new(
            OrderId(1),
            PersonId(1),
            &[DishId(7), DishId(7), DishId(3)],
            Utc::now(),
        )
    }

    #[test]
    fn test_transition_table_allows_only_forward_single_steps() {
        let legal = [
            (OrderStatus::Pending, OrderStatus::InPreparation),
            (OrderStatus::InPreparation, OrderStatus::Finalized),
        ];
        for from in ALL {
            for to in ALL {
                assert_eq!(
                    from.can_advance_to(to),
                    legal.contains(&(from, to)),
                    "{from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn test_new_order_keeps_duplicate_dishes_in_order() {
        let order = pending_order();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.estimated_minutes, None);
        assert_eq!(
            order.dish_ids().collect::<Vec<_>>(),
            vec![DishId(7), DishId(7), DishId(3)]
        );
        assert!(order.items.iter().all(|item| item.order_id == OrderId(1)));
    }

    #[test]
    fn test_full_path_with_estimate() {
        let mut order = pending_order();

        order
            .advance(StatusChange::to(OrderStatus::InPreparation).with_estimate(15))
            .unwrap();
        assert_eq!(order.status, OrderStatus::InPreparation);
        assert_eq!(order.estimated_minutes, Some(15));
        assert_eq!(order.version, 1);

        // a supplied estimate is ignored on finalization; the stored one stays
        order
            .advance(StatusChange::to(OrderStatus::Finalized).with_estimate(99))
            .unwrap();
        assert_eq!(order.status, OrderStatus::Finalized);
        assert_eq!(order.estimated_minutes, Some(15));
        assert_eq!(order.version, 2);
    }

    #[test]
    fn test_skip_to_finalized_is_rejected() {
        let mut order = pending_order();
        let before = order.clone();

        let err = order
            .advance(StatusChange::to(OrderStatus::Finalized))
            .unwrap_err();
        assert_eq!(
            err,
            OrderError::IllegalTransition {
                order_id: OrderId(1),
                from: OrderStatus::Pending,
                to: OrderStatus::Finalized,
            }
        );
        assert_eq!(order, before);
    }

    #[test]
    fn test_missing_estimate_is_rejected() {
        let mut order = pending_order();
        let err = order
            .advance(StatusChange::to(OrderStatus::InPreparation))
            .unwrap_err();
        assert_eq!(err, OrderError::MissingEstimate(OrderId(1)));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.version, 0);
    }

    #[test]
    fn test_zero_minute_estimate_is_accepted() {
        let mut order = pending_order();
        order
            .advance(StatusChange::to(OrderStatus::InPreparation).with_estimate(0))
            .unwrap();
        assert_eq!(order.estimated_minutes, Some(0));
    }

    #[test]
    fn test_finalized_order_cannot_move() {
        let mut order = pending_order();
        order
            .advance(StatusChange::to(OrderStatus::InPreparation).with_estimate(5))
            .unwrap();
        order.advance(StatusChange::to(OrderStatus::Finalized)).unwrap();

        for target in ALL {
            let change = StatusChange::to(target).with_estimate(1);
            assert!(matches!(
                order.advance(change),
                Err(OrderError::IllegalTransition { from: OrderStatus::Finalized, .. })
            ));
        }
        assert_eq!(order.version, 2);
    }

    #[test]
    fn test_backward_move_is_rejected_before_estimate_check() {
        let mut order = pending_order();
        order
            .advance(StatusChange::to(OrderStatus::InPreparation).with_estimate(5))
            .unwrap();

        assert!(matches!(
            order.advance(StatusChange::to(OrderStatus::Pending)),
            Err(OrderError::IllegalTransition { .. })
        ));
        // repeating the step just taken is not its own successor either
        assert!(matches!(
            order.advance(StatusChange::to(OrderStatus::InPreparation)),
            Err(OrderError::IllegalTransition { .. })
        ));
    }

    #[test]
    fn test_stale_version_is_rejected() {
        let mut order = pending_order();
        order
            .advance(
                StatusChange::to(OrderStatus::InPreparation)
                    .with_estimate(10)
                    .expecting_version(0),
            )
            .unwrap();

        let err = order
            .advance(StatusChange::to(OrderStatus::Finalized).expecting_version(0))
            .unwrap_err();
        assert_eq!(
            err,
            OrderError::ConcurrentModification {
                order_id: OrderId(1),
                expected: 0,
                actual: 1,
            }
        );
        assert_eq!(order.status, OrderStatus::InPreparation);

        order
            .advance(StatusChange::to(OrderStatus::Finalized).expecting_version(1))
            .unwrap();
        assert_eq!(order.status, OrderStatus::Finalized);
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::InPreparation).unwrap(),
            "\"in_preparation\""
        );
        // ids go out as bare numbers
        assert_eq!(serde_json::to_string(&OrderId(7)).unwrap(), "7");
    }
}
