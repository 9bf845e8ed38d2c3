//! Tally - a lightweight terminal inventory tracker.
//!
//! This crate provides a keyboard-driven TUI for recording stock items,
//! adjusting quantities, filtering and sorting the list, and persisting it
//! as a JSON snapshot in the platform data directory.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the view-model derivation.
pub mod application;
/// Domain layer containing entities, the inventory collection, and errors.
pub mod domain;
/// Infrastructure layer containing configuration and snapshot persistence.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "tally";
