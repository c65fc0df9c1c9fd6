//! Tracing/logging setup shared by the bookstore binaries.

/// Tracing configuration (filters, formatting, output target).
pub mod tracing;

pub use crate::tracing::LogFormat;

/// Initialize process-wide logging with the defaults: JSON lines on stderr,
/// filtered by `RUST_LOG` (falling back to `info`).
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    tracing::init(LogFormat::Json);
}
