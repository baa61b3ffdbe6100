//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger::Env;

/// Setup logging, `RUST_LOG` wins over `default_level`.
///
/// Calling it more than once is harmless; only the first call installs a logger.
pub fn init_logging(default_level: &str) {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .try_init();
}
