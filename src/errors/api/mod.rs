// API-facing error types
pub mod resource;

// Re-exports for convenience
pub use resource::{ApiError, ErrorResponse};

#[cfg(test)]
mod resource_test;
