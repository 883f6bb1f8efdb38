use async_trait::async_trait;
use resource_actor::{ActorEntity, Filter, FrameworkError, ResourceActor};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Ticket {
    id: u32,
    table: u32,
    served: bool,
}

#[derive(Debug)]
struct TicketCreate {
    table: u32,
}

#[derive(Debug)]
enum TicketAction {
    Serve,
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum TicketError {
    #[error("table must be positive")]
    NoTable,
    #[error("ticket {0} already served")]
    AlreadyServed(u32),
}

#[async_trait]
impl ActorEntity for Ticket {
    type Id = u32;
    type Create = TicketCreate;
    type Action = TicketAction;
    type ActionResult = bool;
    type Context = ();
    type Error = TicketError;

    fn from_create_params(id: u32, params: TicketCreate) -> Result<Self, Self::Error> {
        if params.table == 0 {
            return Err(TicketError::NoTable);
        }
        Ok(Self {
            id,
            table: params.table,
            served: false,
        })
    }

    async fn handle_action(
        &mut self,
        action: TicketAction,
        _ctx: &Self::Context,
    ) -> Result<bool, Self::Error> {
        match action {
            TicketAction::Serve if self.served => Err(TicketError::AlreadyServed(self.id)),
            TicketAction::Serve => {
                self.served = true;
                Ok(true)
            }
        }
    }
}

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    let handle = tokio::spawn(actor.run(()));

    // 1. Create returns the stored entity with its id
    let first = client.create(TicketCreate { table: 4 }).await.unwrap();
    assert_eq!(first.id, 1);
    assert!(!first.served);

    // 2. Action mutates the stored entity
    assert!(client.perform_action(first.id, TicketAction::Serve).await.unwrap());
    let stored = client.get(first.id).await.unwrap().unwrap();
    assert!(stored.served);

    // 3. A rejected action leaves the entity alone and surfaces the entity error
    let err = client
        .perform_action(first.id, TicketAction::Serve)
        .await
        .unwrap_err();
    assert_eq!(
        err.downcast_entity::<TicketError>().unwrap(),
        TicketError::AlreadyServed(1)
    );

    // 4. Unknown ids
    assert!(client.get(42).await.unwrap().is_none());
    assert!(matches!(
        client.perform_action(42, TicketAction::Serve).await,
        Err(FrameworkError::NotFound(id)) if id == "42"
    ));

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_rejected_create_stores_nothing_and_list_is_ordered() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    client.create(TicketCreate { table: 2 }).await.unwrap();
    let err = client.create(TicketCreate { table: 0 }).await.unwrap_err();
    assert_eq!(
        err.downcast_entity::<TicketError>().unwrap(),
        TicketError::NoTable
    );
    client.create(TicketCreate { table: 7 }).await.unwrap();
    client.create(TicketCreate { table: 2 }).await.unwrap();

    let all = client.list(Filter::all()).await.unwrap();
    let ids: Vec<u32> = all.iter().map(|t| t.id).collect();
    // id 2 was consumed by the rejected create
    assert_eq!(ids, vec![1, 3, 4]);

    let table_two = client
        .list(Filter::new(|t: &Ticket| t.table == 2))
        .await
        .unwrap();
    assert_eq!(table_two.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 4]);
}

#[tokio::test]
async fn test_concurrent_actions_are_serialized() {
    let (actor, client) = ResourceActor::<Ticket>::new(32);
    tokio::spawn(actor.run(()));

    let ticket = client.create(TicketCreate { table: 1 }).await.unwrap();

    let mut handles = vec![];
    for _ in 0..8 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.perform_action(ticket.id, TicketAction::Serve).await
        }));
    }

    let mut served = 0;
    let mut rejected = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => served += 1,
            Err(_) => rejected += 1,
        }
    }
    assert_eq!(served, 1);
    assert_eq!(rejected, 7);
}
