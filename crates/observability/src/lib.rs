//! Tracing/logging setup shared by binaries and tests.

/// Subscriber configuration (filters, formatting).
pub mod subscriber;

pub use subscriber::{init, init_with_filter};
