//! The event store abstraction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use koyomi_core::{Event, EventId, EventInput};

use crate::error::StoreError;

/// Persistent storage of [`Event`]s.
///
/// Implementations do not validate payloads; [`EventService`](crate::EventService)
/// does that before calling in.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// All events ordered by start date.
    async fn all(&self) -> Result<Vec<Event>, StoreError>;

    /// The event with `id`, if any.
    async fn get(&self, id: EventId) -> Result<Option<Event>, StoreError>;

    /// Events overlapping `[start, end]` (inclusive), ordered by start date.
    async fn in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Event>, StoreError>;

    /// Store a new event and return it with its id and timestamps.
    async fn create(&self, input: &EventInput) -> Result<Event, StoreError>;

    /// Replace the editable fields of event `id`.  `None` if it does not exist.
    async fn update(&self, id: EventId, input: &EventInput) -> Result<Option<Event>, StoreError>;

    /// Remove event `id`.  Returns `false` if it did not exist.
    async fn delete(&self, id: EventId) -> Result<bool, StoreError>;
}
