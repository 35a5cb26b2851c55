//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub tracer: TracerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub debug: DebugConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Region the view is mounted on.
    #[serde(default = "default_mount")]
    pub mount: String,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mount: default_mount(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

fn default_mount() -> String {
    "app".into()
}

fn default_tick_rate_ms() -> u64 {
    50
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TracerConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Region the tracer panel is mounted on.
    #[serde(default = "default_tracer_selector")]
    pub selector: String,
    /// History length kept by the tracer.
    #[serde(default = "default_tracer_rows")]
    pub rows: usize,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            selector: default_tracer_selector(),
            rows: default_tracer_rows(),
        }
    }
}

fn default_tracer_selector() -> String {
    "tracer".into()
}

fn default_tracer_rows() -> usize {
    25
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Default filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Defaults to `<data_local_dir>/uphonor/logs`.
    #[serde(default)]
    pub log_dir: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            log_dir: None,
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Where the `e` key writes the current state as JSON.
    #[serde(default)]
    pub export_path: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}
