//! Logging setup for the verity crates.
//!
//! Libraries only emit `tracing` events; binaries call [`init`] (or
//! [`init_with`]) once to install a subscriber.
//!
//! ```no_run
//! let _guard = verity_log::init_with(verity_log::Config::development())?;
//! verity_log::info!("ready");
//! # Ok::<(), verity_log::LogError>(())
//! ```

mod builder;
pub mod config;
mod error;
mod writer;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, Format, Level, WriterConfig};
pub use error::{LogError, LogResult};
pub use tracing::{debug, error, info, instrument, trace, warn};

/// Installs a global logger configured from the environment.
///
/// # Errors
///
/// See [`LoggerBuilder::build`].
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::from_env())
}

/// Installs a global logger with `config`.
///
/// # Errors
///
/// See [`LoggerBuilder::build`].
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}

pub mod prelude {
    pub use crate::{Config, Format, Level, LogError, LogResult, LoggerGuard};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}
