//! Event store and service errors.

use koyomi_core::EventId;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised by an [`EventRepository`](crate::EventRepository).
#[derive(Error, Debug)]
pub enum StoreError {
    /// Could not reach the backing store.
    #[error("connection error: {0}")]
    Connection(#[source] BoxError),

    /// Schema migration failed.
    #[error("migration error: {0}")]
    Migration(#[source] BoxError),

    /// Database error
    #[cfg(feature = "postgres")]
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Errors raised by [`EventService`](crate::EventService).
#[derive(Error, Debug)]
pub enum EventError {
    /// The payload failed validation.
    #[error(transparent)]
    Invalid(#[from] koyomi_core::Error),

    /// No event with this id exists.
    #[error("event {0} not found")]
    NotFound(EventId),

    /// The store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
