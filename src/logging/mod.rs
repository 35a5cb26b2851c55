//! Diagnostic logging.
//!
//! The terminal is owned by the UI, so `tracing` output goes to a log file
//! (default: `~/.local/share/uphonor/logs/uphonor.log`). [`StateLogger`]
//! writes every committed state to that log under the `cells` target.

use crate::config::{expand_home, LoggingConfig};
use crate::store::Observer;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::filter::Directive;
use tracing::Subscriber;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

pub fn log_dir(config: &LoggingConfig) -> PathBuf {
    match &config.log_dir {
        Some(dir) => expand_home(dir),
        None => dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("uphonor")
            .join("logs"),
    }
}

fn build_filter(config: &LoggingConfig) -> EnvFilter {
    let mut filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    if let Ok(env) = std::env::var("RUST_LOG") {
        for directive in env.split(',').filter_map(|d| d.parse::<Directive>().ok()) {
            filter = filter.add_directive(directive);
        }
    }

    filter
}

/// Filtered plain-text subscriber writing every event to `file`.
fn file_subscriber(config: &LoggingConfig, file: File) -> impl Subscriber + Send + Sync {
    tracing_subscriber::registry().with(build_filter(config)).with(
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(Mutex::new(file)),
    )
}

/// Install the global subscriber. Returns the log file path, or `None` when
/// logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let dir = log_dir(config);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let log_file = dir.join("uphonor.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))?;

    let _ = tracing::subscriber::set_global_default(file_subscriber(config, file));
    tracing::info!("Logging initialized, writing to: {}", log_file.display());
    Ok(Some(log_file))
}

/// Logs each committed state as JSON.
pub struct StateLogger;

impl<S: Serialize> Observer<S> for StateLogger {
    fn notify(&mut self, state: &S) {
        match serde_json::to_string(state) {
            Ok(json) => tracing::info!(target: "cells", "{}", json),
            Err(e) => tracing::warn!(target: "cells", "state not serializable: {}", e),
        }
    }
}
