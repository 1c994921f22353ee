use std::sync::Arc;

use async_trait::async_trait;
use domain::{EntityId, Event, EventRepository, RepositoryError};
use tracing::{debug, info};

use crate::{
    error::{ApplicationError, ApplicationResult},
    usecase::EventUsecase,
};

pub struct EventServiceDependencies {
    pub event_repository: Arc<EventRepository>,
}

pub struct EventService {
    deps: EventServiceDependencies,
}

impl EventService {
    pub fn new(deps: EventServiceDependencies) -> Self {
        Self { deps }
    }
}

#[async_trait]
impl EventUsecase for EventService {
    async fn create_event(&self, event: Event) -> ApplicationResult<Event> {
        event.validate()?;

        let stored = self.deps.event_repository.create(event).await?;
        info!(event_id = stored.id, title = %stored.title, "event created");
        Ok(stored)
    }

    async fn list_events(&self) -> ApplicationResult<Vec<Event>> {
        let events = self.deps.event_repository.list().await?;
        debug!(count = events.len(), "events listed");
        Ok(events)
    }

    async fn get_event(&self, id: EntityId) -> ApplicationResult<Event> {
        self.deps
            .event_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::from(RepositoryError::not_found("event", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use infrastructure::InMemoryRepository;

    fn service() -> EventService {
        EventService::new(EventServiceDependencies {
            event_repository: Arc::new(InMemoryRepository::<Event>::new()),
        })
    }

    fn event(title: &str) -> Event {
        Event {
            id: 0,
            title: title.to_string(),
            description: "live music".into(),
            location: "Jakarta".into(),
            date: NaiveDate::from_ymd_opt(2026, 12, 24).unwrap(),
        }
    }

    #[tokio::test]
    async fn sequential_creates_only_assign_ids() {
        let service = service();
        let mut last_id = 0;
        for title in ["Java Jazz", "Synchronize", "Soundrenaline"] {
            let input = event(title);
            let created = service.create_event(input.clone()).await.unwrap();

            assert!(created.id > last_id);
            assert_eq!(Event { id: 0, ..created.clone() }, input);
            last_id = created.id;
        }
        assert_eq!(service.list_events().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn blank_title_is_rejected() {
        let err = service().create_event(event("")).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Validation(_)));
    }

    #[tokio::test]
    async fn unknown_event_is_not_found() {
        assert!(service().get_event(1).await.unwrap_err().is_not_found());
    }
}
