// Errors layer - Error type definitions
pub mod api;
pub mod internal;

// Re-exports for convenience
pub use api::{AccountError, AuthError, RecordError};
pub use internal::InternalError;
