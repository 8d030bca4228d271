//! In-process event store.
//!
//! Used when no database is configured and by the test suites.  Contents are
//! lost when the process exits.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use koyomi_core::{Event, EventId, EventInput};
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::repository::EventRepository;

/// An [`EventRepository`] backed by a `BTreeMap` behind a `RwLock`.
#[derive(Debug)]
pub struct InMemoryEventRepository {
    events: RwLock<BTreeMap<EventId, Event>>,
    next_id: AtomicI64,
}

impl Default for InMemoryEventRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryEventRepository {
    /// Create an empty store; the first event gets id 1.
    pub fn new() -> Self {
        Self {
            events: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

fn sorted_by_start(mut events: Vec<Event>) -> Vec<Event> {
    events.sort_by(|a, b| a.start_date.cmp(&b.start_date).then(a.id.cmp(&b.id)));
    events
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn all(&self) -> Result<Vec<Event>, StoreError> {
        let events = self.events.read().await;
        Ok(sorted_by_start(events.values().cloned().collect()))
    }

    async fn get(&self, id: EventId) -> Result<Option<Event>, StoreError> {
        Ok(self.events.read().await.get(&id).cloned())
    }

    async fn in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Event>, StoreError> {
        let events = self.events.read().await;
        Ok(sorted_by_start(
            events
                .values()
                .filter(|e| e.overlaps(start, end))
                .cloned()
                .collect(),
        ))
    }

    async fn create(&self, input: &EventInput) -> Result<Event, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let event = Event::from_input(id, input.clone(), Utc::now());
        self.events.write().await.insert(id, event.clone());
        Ok(event)
    }

    async fn update(&self, id: EventId, input: &EventInput) -> Result<Option<Event>, StoreError> {
        let mut events = self.events.write().await;
        Ok(events.get_mut(&id).map(|event| {
            event.apply(input.clone(), Utc::now());
            event.clone()
        }))
    }

    async fn delete(&self, id: EventId) -> Result<bool, StoreError> {
        Ok(self.events.write().await.remove(&id).is_some())
    }
}
