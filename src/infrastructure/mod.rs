//! Infrastructure layer with configuration and persistence adapters.

/// Application configuration.
pub mod config;
/// Inventory snapshot persistence.
pub mod snapshot;

pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use snapshot::{SnapshotStore, StorageError};
