//! # Tableside
//!
//! Order lifecycle and kitchen aggregation for a restaurant: diners place orders from their
//! table, staff move them through `Pending -> InPreparation -> Finalized`, and kitchen displays
//! poll a per-table view of everything still in progress.
//!
//! - [`model`] - entities ([`Dish`](model::Dish), [`Person`](model::Person),
//!   [`Order`](model::Order)) and the derived view types
//! - [`dish_actor`], [`person_actor`], [`order_actor`] - one resource actor per entity
//! - [`clients`] - typed clients for those actors
//! - [`kitchen`] - read views and polling feeds
//! - [`lifecycle`] - wiring, shutdown and tracing setup
//! - [`config`] - file and environment configuration
//!
//! See [`resource_actor::mock`] for utilities to test clients without spawning full actors.

pub mod clients;
pub mod config;
pub mod dish_actor;
pub mod kitchen;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod person_actor;
