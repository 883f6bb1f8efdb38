//! # Person Client
//!
//! Provides a high‑level API for interacting with the `Person` actor.
//! It wraps a `ResourceClient<Person>` and exposes registry methods.
use crate::model::{Person, PersonCreate};
use crate::person_actor::PersonError;
use async_trait::async_trait;
use resource_actor::{ActorClient, Filter, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Person actor.
#[derive(Clone)]
pub struct PersonClient {
    inner: ResourceClient<Person>,
}

impl PersonClient {
    pub fn new(inner: ResourceClient<Person>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Person> for PersonClient {
    type Error = PersonError;

    fn inner(&self) -> &ResourceClient<Person> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<PersonError>() {
            Ok(err) => err,
            Err(other) => PersonError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl PersonClient {
    /// Seats a person at a table and returns the stored record.
    #[instrument(skip(self))]
    pub async fn register(&self, params: PersonCreate) -> Result<Person, PersonError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Everyone registered so far, newest first.
    #[instrument(skip(self))]
    pub async fn list_people(&self) -> Result<Vec<Person>, PersonError> {
        let mut people = self.list(Filter::all()).await?;
        // ids are handed out in registration order
        people.reverse();
        Ok(people)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PersonId;
    use resource_actor::mock::{create_mock_client, expect_create, expect_list};

    #[tokio::test]
    async fn test_register_sends_payload_and_returns_person() {
        let (client, mut receiver) = create_mock_client::<Person>(10);
        let person_client = PersonClient::new(client);

        let task = tokio::spawn(async move {
            person_client.register(PersonCreate::new("Ana", 4)).await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.name, "Ana");
        assert_eq!(params.table_number, 4);
        responder
            .send(Ok(Person::new(PersonId(1), "Ana", 4)))
            .unwrap();

        let person = task.await.unwrap().unwrap();
        assert_eq!(person.id, PersonId(1));
    }

    #[tokio::test]
    async fn test_register_surfaces_invalid_table() {
        let (client, mut receiver) = create_mock_client::<Person>(10);
        let person_client = PersonClient::new(client);

        let task = tokio::spawn(async move {
            person_client.register(PersonCreate::new("Ana", 0)).await
        });

        let (_, responder) = expect_create(&mut receiver).await.unwrap();
        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                PersonError::InvalidTableNumber(0),
            ))))
            .unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(PersonError::InvalidTableNumber(0))
        );
    }

    #[tokio::test]
    async fn test_list_people_is_newest_first() {
        let (client, mut receiver) = create_mock_client::<Person>(10);
        let person_client = PersonClient::new(client);

        let task = tokio::spawn(async move { person_client.list_people().await });

        let (filter, responder) = expect_list(&mut receiver).await.unwrap();
        let ana = Person::new(PersonId(1), "Ana", 4);
        assert!(filter.matches(&ana));
        responder
            .send(Ok(vec![ana, Person::new(PersonId(2), "Bruno", 2)]))
            .unwrap();

        let ids: Vec<PersonId> = task.await.unwrap().unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![PersonId(2), PersonId(1)]);
    }
}
