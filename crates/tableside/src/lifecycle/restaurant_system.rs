use crate::clients::{DishClient, OrderClient, PersonClient};
use crate::config::RestaurantConfig;
use crate::kitchen::OrderBoard;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The runtime orchestrator for the restaurant.
///
/// `RestaurantSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the person, dish and order actors
/// - **Dependency Wiring**: the order actor validates against the person and dish clients
///
/// # Example
///
/// ```rust
/// use tableside::config::RestaurantConfig;
/// use tableside::lifecycle::RestaurantSystem;
/// use tableside::model::{DishCreate, OrderCreate, PersonCreate};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = RestaurantSystem::new(&RestaurantConfig::default());
///
///     let ana = system.person_client.register(PersonCreate::new("Ana", 4)).await?;
///     let soup = system.dish_client.add_dish(DishCreate::new("Soup")).await?;
///     system
///         .order_client
///         .place_order(OrderCreate::new(ana.id, [soup.id]))
///         .await?;
///
///     let tables = system.board.active_orders_by_table().await?;
///     assert_eq!(tables[0].table_number, 4);
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct RestaurantSystem {
    /// Client for the Order actor
    pub order_client: OrderClient,

    /// Client for the Person actor
    pub person_client: PersonClient,

    /// Client for the Dish actor
    pub dish_client: DishClient,

    /// Read views over all three actors
    pub board: OrderBoard,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl RestaurantSystem {
    /// Creates the actors, wires them together and spawns each in its own Tokio task.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &RestaurantConfig) -> Self {
        let capacity = config.channel_capacity;

        // 1. Create actors (no dependencies)
        let (person_actor, person_client) = crate::person_actor::new(capacity);
        let (dish_actor, dish_client) = crate::dish_actor::new(capacity);
        let (order_actor, order_client) = crate::order_actor::new(capacity);

        // 2. Start actors with injected context
        let person_handle = tokio::spawn(person_actor.run(()));
        let dish_handle = tokio::spawn(dish_actor.run(()));
        let order_handle =
            tokio::spawn(order_actor.run((person_client.clone(), dish_client.clone())));

        let board = OrderBoard::new(
            order_client.clone(),
            person_client.clone(),
            dish_client.clone(),
        );

        info!(capacity, "Restaurant system started");

        Self {
            order_client,
            person_client,
            dish_client,
            board,
            handles: vec![order_handle, person_handle, dish_handle],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Drops every client held here and waits for each actor task to finish. Fails if an actor
    /// task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        let Self {
            order_client,
            person_client,
            dish_client,
            board,
            handles,
        } = self;
        drop(board);
        drop(order_client);
        drop(person_client);
        drop(dish_client);

        for handle in handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
