//! # miaudote-log
//!
//! Structured logging setup for MiAudote services, built on
//! `tracing-subscriber`.
//!
//! ```rust,no_run
//! fn main() -> Result<(), miaudote_log::LogError> {
//!     // MIAUDOTE_LOG / RUST_LOG when set, otherwise a build-profile preset
//!     miaudote_log::auto_init()?;
//!
//!     tracing::info!(port = 8080, "server starting");
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;

pub use builder::LoggerBuilder;
pub use config::{Config, DisplayConfig, Format, LOG_FORMAT_VAR, LOG_VAR, WriterConfig};
pub use error::{LogError, LogResult};

/// Picks a configuration from the environment or the build profile and
/// installs it.
pub fn auto_init() -> LogResult<()> {
    let env_set = std::env::var_os(LOG_VAR).is_some() || std::env::var_os("RUST_LOG").is_some();
    if env_set {
        init_with(Config::from_env())
    } else if cfg!(debug_assertions) {
        init_with(Config::development())
    } else {
        init_with(Config::production())
    }
}

/// Initialize with default configuration
pub fn init() -> LogResult<()> {
    init_with(Config::default())
}

/// Initialize with custom configuration
pub fn init_with(config: Config) -> LogResult<()> {
    LoggerBuilder::from_config(config).build()
}

/// Installs [`Config::test`] once per process; later calls are no-ops.
pub fn init_test() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        if tracing::dispatcher::has_been_set() {
            return;
        }
        // Another harness may have raced us to the global default.
        let _ = init_with(Config::test());
    });
}
