use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tableside::config::RestaurantConfig;
use tableside::kitchen::{spawn_feed, KitchenView, PersonOrders, Snapshot};
use tableside::lifecycle::RestaurantSystem;
use tableside::model::{DishCreate, OrderCreate, OrderStatus, PersonCreate};
use tableside::order_actor::OrderError;
use tokio::time::{sleep, timeout};

const PERIOD: Duration = Duration::from_millis(20);
const WAIT: Duration = Duration::from_secs(2);

#[tokio::test]
async fn test_kitchen_feed_publishes_changes_only() {
    let system = RestaurantSystem::new(&RestaurantConfig::default());
    let soup = system
        .dish_client
        .add_dish(DishCreate::new("Soup"))
        .await
        .unwrap();
    let ana = system
        .person_client
        .register(PersonCreate::new("Ana", 3))
        .await
        .unwrap();

    let (mut board, feed) = spawn_feed(KitchenView(system.board.clone()), PERIOD)
        .await
        .unwrap();
    assert!(board.borrow_and_update().is_empty());

    // nothing happens, nothing is published
    assert!(timeout(PERIOD * 5, board.changed()).await.is_err());

    let order = system
        .order_client
        .place_order(OrderCreate::new(ana.id, [soup.id]))
        .await
        .unwrap();
    timeout(WAIT, board.changed()).await.unwrap().unwrap();
    {
        let tables = board.borrow_and_update();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].orders[0].order_id, order.id);
    }

    system
        .order_client
        .advance_status(order.id, OrderStatus::InPreparation, Some(5))
        .await
        .unwrap();
    timeout(WAIT, board.changed()).await.unwrap().unwrap();
    assert_eq!(
        board.borrow_and_update()[0].orders[0].status,
        OrderStatus::InPreparation
    );

    // the task stops once nobody is watching
    drop(board);
    timeout(WAIT, feed).await.unwrap().unwrap();

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_person_feed_follows_own_orders() {
    let system = RestaurantSystem::new(&RestaurantConfig::default());
    let soup = system
        .dish_client
        .add_dish(DishCreate::new("Soup"))
        .await
        .unwrap();
    let ana = system
        .person_client
        .register(PersonCreate::new("Ana", 3))
        .await
        .unwrap();
    let bruno = system
        .person_client
        .register(PersonCreate::new("Bruno", 1))
        .await
        .unwrap();

    let source = PersonOrders {
        board: system.board.clone(),
        person_id: ana.id,
    };
    let (mut mine, feed) = spawn_feed(source, PERIOD).await.unwrap();

    // someone else's order is not Ana's concern
    system
        .order_client
        .place_order(OrderCreate::new(bruno.id, [soup.id]))
        .await
        .unwrap();
    assert!(timeout(PERIOD * 5, mine.changed()).await.is_err());

    let order = system
        .order_client
        .place_order(OrderCreate::new(ana.id, [soup.id]))
        .await
        .unwrap();
    timeout(WAIT, mine.changed()).await.unwrap().unwrap();
    assert_eq!(mine.borrow_and_update()[0].order_id, order.id);

    drop(mine);
    timeout(WAIT, feed).await.unwrap().unwrap();
}

/// Answers from a script; once the script runs dry every read fails.
#[derive(Clone, Default)]
struct Scripted {
    replies: Arc<Mutex<VecDeque<Result<u32, OrderError>>>>,
    reads: Arc<Mutex<usize>>,
}

impl Scripted {
    fn push(&self, reply: Result<u32, OrderError>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    fn reads(&self) -> usize {
        *self.reads.lock().unwrap()
    }
}

#[async_trait]
impl Snapshot for Scripted {
    type Output = u32;

    fn name(&self) -> String {
        "scripted".to_string()
    }

    async fn snapshot(&self) -> Result<u32, OrderError> {
        *self.reads.lock().unwrap() += 1;
        self.replies.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(OrderError::ActorCommunicationError("Actor closed".into()))
        })
    }
}

#[tokio::test]
async fn test_feed_keeps_last_value_while_reads_fail() {
    let source = Scripted::default();
    source.push(Ok(0));

    let (mut rx, feed) = spawn_feed(source.clone(), PERIOD).await.unwrap();
    assert_eq!(*rx.borrow_and_update(), 0);

    // let a few polls fail
    timeout(WAIT, async {
        while source.reads() < 4 {
            sleep(PERIOD).await;
        }
    })
    .await
    .unwrap();
    assert!(!rx.has_changed().unwrap());
    assert_eq!(*rx.borrow(), 0);

    // reads recover
    source.push(Ok(3));
    timeout(WAIT, rx.changed()).await.unwrap().unwrap();
    assert_eq!(*rx.borrow_and_update(), 3);

    drop(rx);
    timeout(WAIT, feed).await.unwrap().unwrap();
}
