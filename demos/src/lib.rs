//! Demo programs for `flagset`: an integer calculator and a string echo.
//!
//! The subcommand builders live here so the binaries stay thin and the
//! behavior can be tested in-process.

pub mod calculator;
pub mod echo;

use std::path::Path;

use anyhow::Context;
use flagset_core::ParserConfig;
use tracing_subscriber::EnvFilter;

/// Dispatcher configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "flagset.yml";

/// Installs a stderr log subscriber filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the dispatcher configuration from `path`, or the defaults when the
/// file does not exist.
///
/// # Errors
///
/// Fails when the file exists but cannot be read or parsed.
pub fn load_config(path: impl AsRef<Path>) -> anyhow::Result<ParserConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(ParserConfig::default());
    }
    ParserConfig::load(path).with_context(|| format!("failed to load {}", path.display()))
}
