//! # koyomi-time
//!
//! The calendar computation engine: Japanese national holidays, the rokuyo
//! six-day cycle, and annotated monthly calendars.
//!
//! Everything here is a pure function of its inputs; there is no I/O, no
//! shared state, and no caching between calls.
//!
//! ```
//! use koyomi_time::{build_month, compute_holidays};
//!
//! let holidays = compute_holidays(2025);
//! assert!(holidays.iter().any(|h| h.name == "文化の日"));
//!
//! let december = build_month(2025, 12).unwrap();
//! assert_eq!(december.days.len(), 31);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Calendar`, `CalendarDay`, and `CalendarBuilder`.
pub mod calendar;

/// Date helpers: month bounds, n-th weekday, supported years.
pub mod date;

/// National holiday computation.
pub mod holiday;

/// `Month`: month of the year.
pub mod month;

/// Rokuyo six-day cycle (arithmetic approximation).
pub mod rokuyo;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{build_month, Calendar, CalendarBuilder, CalendarDay};
pub use date::SUPPORTED_YEARS;
pub use holiday::{compute_holidays, Holiday, HolidayCalculator, NationalHoliday};
pub use month::Month;
pub use rokuyo::Rokuyo;
pub use weekday::Weekday;
