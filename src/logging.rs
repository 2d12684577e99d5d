//! Logging setup

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

/// Adjusts the level of an installed subscriber
pub struct LogLevelHandle(reload::Handle<EnvFilter, Registry>);

impl LogLevelHandle {
    /// Switch to a new level unless `RUST_LOG` is set.
    ///
    /// An invalid level is an error even when `RUST_LOG` wins.
    pub fn set_level(&self, level: &str) -> Result<()> {
        let filter = EnvFilter::try_new(level)?;
        if EnvFilter::try_from_default_env().is_ok() {
            return Ok(());
        }

        // Fails only when another subscriber was installed first
        self.0.reload(filter).ok();
        Ok(())
    }
}

/// Setup logging with the specified level; `RUST_LOG` takes precedence.
///
/// Logs go to stderr so stdout only carries the report. The returned
/// handle changes the level later, once the configuration is known.
pub fn setup_logging(level: &str) -> Result<LogLevelHandle> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .ok();

    Ok(LogLevelHandle(handle))
}
