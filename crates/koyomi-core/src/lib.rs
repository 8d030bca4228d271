//! # koyomi-core
//!
//! Core types and error definitions for koyomi.
//!
//! This crate provides the building blocks shared across the other crates in
//! the workspace: the error hierarchy, the label [`Locale`], and the user
//! [`Event`] model that calendar days carry.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// User-created calendar events and their create/update payload.
pub mod event;

/// Label language for weekday, holiday, and rokuyo names.
pub mod locale;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use event::{Event, EventId, EventInput};
pub use locale::Locale;
