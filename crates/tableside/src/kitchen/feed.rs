//! Polling feeds on top of the board reads.
//!
//! Displays are expected to poll. A feed does the polling for them: it repeats one idempotent
//! read on a fixed interval and publishes into a [`watch`] channel only when the answer changed.
//! Subscribers can still call the [`OrderBoard`] reads directly at any time; the feed holds no
//! state the reads depend on.

use super::board::OrderBoard;
use crate::model::{OrderDetails, PersonId, TableView};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// A read that can be repeated as often as needed.
#[async_trait]
pub trait Snapshot: Send + Sync + 'static {
    type Output: Clone + PartialEq + Send + Sync + 'static;

    /// Short label used in logs.
    fn name(&self) -> String;

    async fn snapshot(&self) -> Result<Self::Output, OrderError>;
}

/// The kitchen display: active orders grouped by table.
pub struct KitchenView(pub OrderBoard);

#[async_trait]
impl Snapshot for KitchenView {
    type Output = Vec<TableView>;

    fn name(&self) -> String {
        "kitchen".to_string()
    }

    async fn snapshot(&self) -> Result<Vec<TableView>, OrderError> {
        self.0.active_orders_by_table().await
    }
}

/// A diner's own order status page.
pub struct PersonOrders {
    pub board: OrderBoard,
    pub person_id: PersonId,
}

#[async_trait]
impl Snapshot for PersonOrders {
    type Output = Vec<OrderDetails>;

    fn name(&self) -> String {
        self.person_id.to_string()
    }

    async fn snapshot(&self) -> Result<Vec<OrderDetails>, OrderError> {
        self.board.orders_for_person(self.person_id).await
    }
}

/// Takes a first snapshot, then keeps polling `source` every `period` in a background task.
///
/// The first read happens before this returns, so its error is the caller's. Later read errors
/// are logged and the last published value stays in place. The task ends once every receiver
/// has been dropped.
pub async fn spawn_feed<S: Snapshot>(
    source: S,
    period: Duration,
) -> Result<(watch::Receiver<S::Output>, JoinHandle<()>), OrderError> {
    let initial = source.snapshot().await?;
    let (sender, receiver) = watch::channel(initial);

    let handle = tokio::spawn(async move {
        let feed = source.name();
        info!(feed = %feed, ?period, "Feed started");

        let mut ticker = tokio::time::interval(period.max(MIN_PERIOD));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // the first tick fires immediately and the initial snapshot is already published
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = sender.closed() => break,
                _ = ticker.tick() => {}
            }

            match source.snapshot().await {
                Ok(next) => {
                    let changed = sender.send_if_modified(|current| {
                        if *current == next {
                            return false;
                        }
                        *current = next;
                        true
                    });
                    if changed {
                        debug!(feed = %feed, "Published new snapshot");
                    }
                }
                Err(e) => warn!(feed = %feed, error = %e, "Snapshot failed; keeping previous value"),
            }
        }

        info!(feed = %feed, "Feed stopped");
    });

    Ok((receiver, handle))
}
