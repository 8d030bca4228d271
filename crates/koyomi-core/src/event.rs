//! User-created calendar events.
//!
//! Events are not computed by the calendar engine; they are stored by the
//! persistence layer and merged into calendar days by date-range overlap.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::ensure;
use crate::errors::Result;

/// Identifier assigned to an event by the store.
pub type EventId = i64;

/// A stored calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Store-assigned identifier.
    pub id: EventId,
    /// Short title shown on the calendar.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Start instant (inclusive).
    pub start_date: DateTime<Utc>,
    /// End instant (inclusive).
    pub end_date: DateTime<Utc>,
    /// Whether the event spans whole days.
    pub all_day: bool,
    /// When the event was first stored.
    pub created_at: DateTime<Utc>,
    /// When the event was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Build a new event from a validated payload.
    pub fn from_input(id: EventId, input: EventInput, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            start_date: input.start_date,
            end_date: input.end_date,
            all_day: input.all_day,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the editable fields with `input`, bumping `updated_at`.
    pub fn apply(&mut self, input: EventInput, now: DateTime<Utc>) {
        self.title = input.title;
        self.description = input.description;
        self.start_date = input.start_date;
        self.end_date = input.end_date;
        self.all_day = input.all_day;
        self.updated_at = now;
    }

    /// Return `true` if `[start_date, end_date]` intersects `[start, end]`
    /// (both bounds inclusive).
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start_date <= end && self.end_date >= start
    }

    /// Return `true` if the event touches the UTC calendar day `date`.
    pub fn falls_on(&self, date: NaiveDate) -> bool {
        let day_start = Utc.from_utc_datetime(&date.and_time(NaiveTime::default()));
        let next_day = day_start + Duration::days(1);
        self.start_date < next_day && self.end_date >= day_start
    }
}

/// Create/update payload for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventInput {
    /// Short title; must not be blank.
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Start instant.
    pub start_date: DateTime<Utc>,
    /// End instant; must not precede `start_date`.
    pub end_date: DateTime<Utc>,
    /// Whether the event spans whole days.
    #[serde(default)]
    pub all_day: bool,
}

impl EventInput {
    /// Check the payload invariants.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) if the
    /// title is blank or the end precedes the start.
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.title.trim().is_empty(), "title must not be empty");
        ensure!(
            self.end_date >= self.start_date,
            "end_date {} is before start_date {}",
            self.end_date,
            self.start_date
        );
        Ok(())
    }
}
