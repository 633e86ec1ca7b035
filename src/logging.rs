//! Log bootstrap.
//!
//! Logs go to a file in the data directory so they never interleave with the
//! interactive output on stdout.

use crate::config::Config;
use crate::context::AppContext;
use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::OpenOptions;
use std::path::PathBuf;

/// Installs the global file logger at the configured level.
///
/// Returns the log file path. A logger that is already installed (e.g. a
/// second call in the same process) is reported as an error, not a panic.
pub fn init_logging(ctx: &dyn AppContext, config: &Config) -> Result<PathBuf> {
    let level = config.level_filter()?;
    let path = ctx.get_log_path()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    let log_config = ConfigBuilder::new()
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();

    WriteLogger::init(level, log_config, file).context("Logger already initialized")?;
    log::info!("taskline v{} started", env!("CARGO_PKG_VERSION"));
    Ok(path)
}
