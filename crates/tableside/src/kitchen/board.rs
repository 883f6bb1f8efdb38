//! Read views over the order store.
//!
//! Every call reads the current state of the actors and rebuilds its answer from scratch. There
//! is no cache and no per-caller state, so repeating a call is always safe.

use crate::clients::{DishClient, OrderClient, PersonClient};
use crate::model::{Dish, DishId, DishLine, Order, OrderDetails, Person, PersonId, TableView};
use crate::order_actor::OrderError;
use resource_actor::{ActorClient, Filter};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, instrument};

/// Read side of the kitchen: per-person history and the per-table board.
#[derive(Clone)]
pub struct OrderBoard {
    orders: OrderClient,
    people: PersonClient,
    dishes: DishClient,
}

impl OrderBoard {
    pub fn new(orders: OrderClient, people: PersonClient, dishes: DishClient) -> Self {
        Self {
            orders,
            people,
            dishes,
        }
    }

    /// Every order the person placed, newest first, whatever its status.
    ///
    /// An unknown person simply has no orders.
    #[instrument(skip(self))]
    pub async fn orders_for_person(
        &self,
        person_id: PersonId,
    ) -> Result<Vec<OrderDetails>, OrderError> {
        let mut orders = self
            .orders
            .orders_where(Filter::new(move |order: &Order| order.person_id == person_id))
            .await?;
        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let person = self
            .people
            .get(person_id)
            .await?
            .ok_or(OrderError::InvalidPerson(person_id))?;
        let people = HashMap::from([(person.id, person)]);
        let dishes = self.dish_names().await?;

        orders.sort_by(|a, b| {
            b.placed_at
                .cmp(&a.placed_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        let details = orders
            .iter()
            .map(|order| resolve(order, &people, &dishes))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(orders = details.len(), "Resolved person history");
        Ok(details)
    }

    /// Active orders grouped by table, tables ascending, earliest order first within a table.
    #[instrument(skip(self))]
    pub async fn active_orders_by_table(&self) -> Result<Vec<TableView>, OrderError> {
        let active = self
            .orders
            .orders_where(Filter::new(|order: &Order| order.status.is_active()))
            .await?;
        if active.is_empty() {
            return Ok(Vec::new());
        }

        let people: HashMap<PersonId, Person> = self
            .people
            .list(Filter::all())
            .await?
            .into_iter()
            .map(|person| (person.id, person))
            .collect();
        let dishes = self.dish_names().await?;

        let tables = group_by_table(&active, &people, &dishes)?;
        debug!(tables = tables.len(), orders = active.len(), "Built kitchen view");
        Ok(tables)
    }

    async fn dish_names(&self) -> Result<HashMap<DishId, Dish>, OrderError> {
        Ok(self
            .dishes
            .list_dishes()
            .await?
            .into_iter()
            .map(|dish| (dish.id, dish))
            .collect())
    }
}

/// Groups the active orders in `orders` by their person's table.
///
/// Finalized orders are skipped, so a table only appears while it has something in the kitchen.
/// A person or dish missing from the lookup maps fails the whole call; a partial board is never
/// returned.
pub fn group_by_table(
    orders: &[Order],
    people: &HashMap<PersonId, Person>,
    dishes: &HashMap<DishId, Dish>,
) -> Result<Vec<TableView>, OrderError> {
    let mut tables: BTreeMap<u32, Vec<OrderDetails>> = BTreeMap::new();
    for order in orders.iter().filter(|order| order.status.is_active()) {
        let details = resolve(order, people, dishes)?;
        tables.entry(details.table_number).or_default().push(details);
    }

    Ok(tables
        .into_iter()
        .map(|(table_number, mut orders)| {
            orders.sort_by(|a, b| {
                a.placed_at
                    .cmp(&b.placed_at)
                    .then_with(|| a.order_id.cmp(&b.order_id))
            });
            TableView {
                table_number,
                orders,
            }
        })
        .collect())
}

fn resolve(
    order: &Order,
    people: &HashMap<PersonId, Person>,
    dishes: &HashMap<DishId, Dish>,
) -> Result<OrderDetails, OrderError> {
    let person = people
        .get(&order.person_id)
        .ok_or(OrderError::InvalidPerson(order.person_id))?;
    let lines = order
        .dish_ids()
        .map(|dish_id| {
            dishes
                .get(&dish_id)
                .map(|dish| DishLine {
                    dish_id,
                    name: dish.name.clone(),
                })
                .ok_or(OrderError::InvalidDish(dish_id))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(OrderDetails {
        order_id: order.id,
        person_id: order.person_id,
        table_number: person.table_number,
        status: order.status,
        estimated_minutes: order.estimated_minutes,
        placed_at: order.placed_at,
        dishes: lines,
    })
}
