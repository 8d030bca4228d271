//! Event use cases: validation in front of an [`EventRepository`].

use std::sync::Arc;

use chrono::{DateTime, Utc};
use koyomi_core::{Event, EventId, EventInput};
use tracing::{debug, info};

use crate::error::EventError;
use crate::repository::EventRepository;

/// Validates payloads and maps missing events to [`EventError::NotFound`].
///
/// Cheap to clone; clones share the same repository.
#[derive(Clone)]
pub struct EventService {
    repo: Arc<dyn EventRepository>,
}

impl std::fmt::Debug for EventService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventService").finish_non_exhaustive()
    }
}

impl EventService {
    /// Create a service over `repo`.
    pub fn new(repo: Arc<dyn EventRepository>) -> Self {
        Self { repo }
    }

    /// All events ordered by start date.
    pub async fn all_events(&self) -> Result<Vec<Event>, EventError> {
        Ok(self.repo.all().await?)
    }

    /// The event with `id`.
    pub async fn event(&self, id: EventId) -> Result<Event, EventError> {
        self.repo.get(id).await?.ok_or(EventError::NotFound(id))
    }

    /// Events overlapping `[start, end]`.
    pub async fn events_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Event>, EventError> {
        let events = self.repo.in_range(start, end).await?;
        debug!(%start, %end, count = events.len(), "events in range");
        Ok(events)
    }

    /// Validate and store a new event.
    pub async fn create_event(&self, input: EventInput) -> Result<Event, EventError> {
        input.validate()?;
        let event = self.repo.create(&input).await?;
        info!(id = event.id, title = %event.title, "event created");
        Ok(event)
    }

    /// Validate and replace event `id`.
    pub async fn update_event(&self, id: EventId, input: EventInput) -> Result<Event, EventError> {
        input.validate()?;
        let event = self
            .repo
            .update(id, &input)
            .await?
            .ok_or(EventError::NotFound(id))?;
        info!(id, "event updated");
        Ok(event)
    }

    /// Remove event `id`.
    pub async fn delete_event(&self, id: EventId) -> Result<(), EventError> {
        if !self.repo.delete(id).await? {
            return Err(EventError::NotFound(id));
        }
        info!(id, "event deleted");
        Ok(())
    }
}
