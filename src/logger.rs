//! Logging setup
//!
//! Wires the `log` macros used across the crate to a fern dispatcher,
//! configured from [`LoggingConfig`]. Call once at host startup; calling
//! with logging disabled is a no-op so hosts can pass the config through
//! unconditionally.

use anyhow::Result;
use chrono::Utc;

use crate::config::LoggingConfig;

/// Initialize the global logger from configuration.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stderr());

    if let Some(path) = &config.file {
        dispatch = dispatch.chain(fern::log_file(path)?);
    }

    dispatch.apply()?;
    Ok(())
}
