//! # koyomi
//!
//! Monthly calendars for Japan: every day annotated with its weekday,
//! national holiday and rokuyo label, plus user events merged in by date.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `koyomi-*` crates.  The HTTP service lives in `koyomi-server`.
//!
//! ## Quick start
//!
//! ```rust
//! use koyomi::time::{CalendarBuilder, HolidayCalculator};
//! use koyomi::core::Locale;
//!
//! let may = CalendarBuilder::new().build(2025, 5).unwrap();
//! assert_eq!(may.days[2].holiday, Some("憲法記念日"));
//!
//! let holidays = HolidayCalculator::with_locale(Locale::En).holidays(2025);
//! assert_eq!(holidays[0].name, "New Year's Day");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Errors, locale, and the event model.
pub use koyomi_core as core;

/// Holidays, rokuyo, and calendar construction.
pub use koyomi_time as time;

/// Event storage and merging.
pub use koyomi_events as events;
