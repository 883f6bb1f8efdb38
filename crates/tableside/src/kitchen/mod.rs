//! # Kitchen
//!
//! The read side of the system.
//!
//! - [`board`] - [`OrderBoard`] with the two views staff and diners poll, plus the pure
//!   [`group_by_table`] used to build the kitchen display
//! - [`feed`] - background polling that publishes a view into a `watch` channel when it changes

pub mod board;
pub mod feed;

pub use board::*;
pub use feed::*;
