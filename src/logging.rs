//! Logging setup for tests and applications.
//!
//! The crate itself only emits [`tracing`] events. Digest calculation logs
//! at debug level, collation of individual records at trace level.

use tracing_subscriber::EnvFilter;

/// Setup logging of events reported by the crate.
///
/// Use the RUST_LOG environment variable to override the defaults.
///
/// E.g. To enable debug level logging:
///   RUST_LOG=DEBUG
///
/// Or to only see which records are skipped during collation:
///   RUST_LOG=domain_zonemd::zonemd::collate=TRACE
///
/// Calling the function more than once is harmless. Only the first call
/// installs a subscriber.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_thread_ids(true)
        .without_time()
        .try_init()
        .ok();
}
