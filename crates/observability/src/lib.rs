//! Tracing and logging (shared setup).

pub use crate::tracing::{LogFormat, TracingConfig};

/// Initialize process-wide tracing with the default configuration.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&TracingConfig::default());
}

/// Initialize process-wide tracing from an explicit configuration.
pub fn init_with(config: &TracingConfig) {
    tracing::init(config);
}

/// Tracing configuration (filters, formats).
pub mod tracing;
