//! Shared handler state.

use std::sync::Arc;

use koyomi_core::Locale;
use koyomi_events::{EventRepository, EventService};
use koyomi_time::{CalendarBuilder, HolidayCalculator};

/// Application state shared across handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Event use cases
    pub events: EventService,
    /// Monthly calendar construction
    pub calendars: CalendarBuilder,
    /// Holiday lists
    pub holidays: HolidayCalculator,
}

impl AppState {
    /// State over `repo`, producing labels in `locale`.
    pub fn new(repo: Arc<dyn EventRepository>, locale: Locale) -> Self {
        Self {
            events: EventService::new(repo),
            calendars: CalendarBuilder::with_locale(locale),
            holidays: HolidayCalculator::with_locale(locale),
        }
    }
}
