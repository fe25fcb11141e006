//! Tracing/logging setup shared by the ledger binaries.
//!
//! Domain crates only emit `tracing` events and spans; installing a subscriber
//! is left to the process entry point.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::LogFormat;

/// Initialize process-wide tracing with JSON output.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(LogFormat::Json);
}
