//! Tracing and logging (shared setup).

/// Initialize process-wide logging with the defaults (`info`, JSON output).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&tracing::LogSettings::default());
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::LogSettings;
