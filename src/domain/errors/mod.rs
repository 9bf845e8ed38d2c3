//! Error types.

mod validation_error;

pub use validation_error::ValidationError;
