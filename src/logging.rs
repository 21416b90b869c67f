//! Tracing setup for the chat bridge.
//!
//! Events from this crate pass at the configured level, everything else at
//! `warn`. `RUST_LOG` replaces that filter entirely when set. Output goes to
//! the console, and also to the configured log file without ANSI colors.

use std::fs::{self, File};
use std::path::Path;
use std::sync::Arc;

use tracing::{Level, Subscriber};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::{HudChatError, Result};

/// Target prefix of every event this crate emits.
const CRATE_TARGET: &str = env!("CARGO_CRATE_NAME");

fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Filter directive used when `RUST_LOG` is unset.
fn default_directive(level: &str) -> String {
    let level = parse_level(level).as_str().to_lowercase();
    format!("warn,{CRATE_TARGET}={level}")
}

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(level)))
}

/// Open the log file for writing, creating missing parent directories.
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(File::create(path)?)
}

fn console_layer<S>() -> fmt::Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer().with_target(true)
}

/// Install the global subscriber.
///
/// Fails if the log file cannot be opened or a subscriber is already set.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let file_layer = match config.log_file() {
        Some(path) => {
            let file = Arc::new(open_log_file(Path::new(path))?);
            Some(
                fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_target(true),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(build_filter(&config.level))
        .with(console_layer())
        .with(file_layer)
        .try_init()
        .map_err(|e| HudChatError::Config(format!("cannot install logger: {e}")))
}

/// Install a console-only subscriber. Does nothing if one is already set.
pub fn init_console_only(level: &str) {
    let _ = tracing_subscriber::registry()
        .with(build_filter(level))
        .with(console_layer())
        .try_init();
}
