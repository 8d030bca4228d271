//! Distribution of events into calendar days.

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use koyomi_core::Event;
use koyomi_time::Calendar;

/// The UTC instant range covered by `calendar`: from 00:00 on its first day
/// up to, but excluding, 00:00 on the day after its last.
///
/// The returned end is one microsecond before that midnight so it can be
/// passed to the inclusive [`EventRepository::in_range`](crate::EventRepository::in_range).
/// `None` for an empty calendar.
pub fn month_range(calendar: &Calendar) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let first = calendar.first_date()?;
    let last = calendar.last_date()?;
    let start = Utc.from_utc_datetime(&first.and_time(NaiveTime::default()));
    let next = Utc.from_utc_datetime(&last.and_time(NaiveTime::default())) + Duration::days(1);
    Some((start, next - Duration::microseconds(1)))
}

/// Append each event to every day of `calendar` it touches.
///
/// A day's bucket keeps the order of `events`.  Events outside the month are
/// ignored.
pub fn merge_events(calendar: &mut Calendar, events: &[Event]) {
    for day in &mut calendar.days {
        day.events.extend(events.iter().filter(|e| e.falls_on(day.date)).cloned());
    }
}
