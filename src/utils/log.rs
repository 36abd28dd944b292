// src/utils/log.rs

//! Structured logging for the zap codec, built on the `tracing` crate.
//!
//! Initialize the subscriber once before using the library:
//!
//! ```
//! zap_codec::utils::log::init_subscriber(tracing::Level::DEBUG);
//! ```
//!
//! Then use the logging macros throughout the code:
//! `trace!`, `debug!`, `info!`, `warn!`, `error!`.

pub use tracing::{debug, error, info, span, trace, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Initializes a global logging subscriber.
///
/// This should be called once at the beginning of the program's execution.
/// It sets up a simple subscriber that logs messages to standard error.
///
/// # Arguments
/// * `max_level` - The maximum level of messages to log (e.g., `Level::INFO`, `Level::DEBUG`).
pub fn init_subscriber(max_level: Level) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(max_level)
        .with_target(false)
        .finish();

    // Tests may race to initialize; the first subscriber wins.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
