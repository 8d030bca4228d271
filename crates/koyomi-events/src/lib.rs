//! # koyomi-events
//!
//! Storage and retrieval of user-created events, and merging of those
//! events into the days of a [`Calendar`](koyomi_time::Calendar).
//!
//! The calendar engine never touches this crate; the transport layer fetches
//! the events overlapping a month and hands them to [`merge_events`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use koyomi_events::{EventService, PostgresEventRepository};
//!
//! let repo = PostgresEventRepository::connect("postgres://...", 5).await?;
//! let service = EventService::new(std::sync::Arc::new(repo));
//! let events = service.all_events().await?;
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod memory;
mod merge;
mod repository;
mod service;

pub use error::{EventError, StoreError};
pub use memory::InMemoryEventRepository;
pub use merge::{merge_events, month_range};
pub use repository::EventRepository;
pub use service::EventService;

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::PostgresEventRepository;
