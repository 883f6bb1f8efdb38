//! # Tableside demo
//!
//! Runs one dining session end to end:
//! 1.  Loads [`RestaurantConfig`] and sets up tracing.
//! 2.  Starts the [`RestaurantSystem`], seeds the catalog and seats two diners.
//! 3.  Places orders and walks one of them through the kitchen while a feed watches the board.

use std::path::PathBuf;
use tableside::config::{load_config, RestaurantConfig};
use tableside::kitchen::{spawn_feed, KitchenView};
use tableside::lifecycle::{setup_tracing, RestaurantSystem};
use tableside::model::{DishCreate, OrderCreate, OrderStatus, PersonCreate};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match load_config(std::env::args().nth(1).map(PathBuf::from)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration ({e}); using defaults");
            RestaurantConfig::default()
        }
    };
    setup_tracing(&config.log_filter);

    info!(?config, "Starting restaurant");
    let system = RestaurantSystem::new(&config);

    let span = tracing::info_span!("seeding");
    let (pasta, salad, ana, bruno) = async {
        let pasta = system.dish_client.add_dish(DishCreate::new("Pasta")).await?;
        let salad = system.dish_client.add_dish(DishCreate::new("Salad")).await?;
        let ana = system
            .person_client
            .register(PersonCreate::new("Ana", 4))
            .await?;
        let bruno = system
            .person_client
            .register(PersonCreate::new("Bruno", 2))
            .await?;
        Ok::<_, Box<dyn std::error::Error>>((pasta, salad, ana, bruno))
    }
    .instrument(span)
    .await?;

    let (mut board, feed) =
        spawn_feed(KitchenView(system.board.clone()), config.poll_interval()).await?;

    let span = tracing::info_span!("service");
    async {
        let order = system
            .order_client
            .place_order(OrderCreate::new(ana.id, [pasta.id, salad.id]))
            .await?;
        system
            .order_client
            .place_order(OrderCreate::new(bruno.id, [salad.id, salad.id]))
            .await?;

        if let Err(e) = system
            .order_client
            .advance_status(order.id, OrderStatus::Finalized, None)
            .await
        {
            warn!(error = %e, "Kitchen tried to skip preparation");
        }

        system
            .order_client
            .advance_status(order.id, OrderStatus::InPreparation, Some(20))
            .await?;

        board.changed().await?;
        for table in board.borrow_and_update().iter() {
            info!(table = table.table_number, orders = table.orders.len(), "On the board");
        }

        system
            .order_client
            .advance_status(order.id, OrderStatus::Finalized, None)
            .await?;

        for details in system.board.orders_for_person(ana.id).await? {
            info!(order_id = %details.order_id, status = %details.status, "Ana's order");
        }
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    drop(board);
    feed.await?;
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
