use std::path::PathBuf;

use serde::Deserialize;

/// Top-level Lunaria configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LunariaConfig {
    /// Active observer location.
    pub location: LocationConfig,

    /// Data source paths.
    pub data: DataConfig,

    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Dataset fetch retry settings.
    #[serde(default)]
    pub retry: RetryConfig,
}

/// `[location]` section: where the calendar is observed from.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationConfig {
    pub lat: f64,
    pub lon: f64,
    #[serde(default = "default_label")]
    pub label: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_label() -> String {
    "Greenwich, UK".to_string()
}
fn default_timezone() -> String {
    "UTC".to_string()
}

/// `[data]` section: where boundary and rule data come from.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    /// JSON boundary dataset snapshot from the astronomy collaborator.
    pub boundaries: PathBuf,
    /// Optional JSON special-day rule table.
    #[serde(default)]
    pub special_days: Option<PathBuf>,
}

/// `[display]` section.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Initial grid mode: "custom" or "gregorian".
    #[serde(default = "default_mode")]
    pub mode: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
        }
    }
}

fn default_mode() -> String {
    "custom".to_string()
}

/// `[retry]` section: bounded poll while waiting for dataset availability.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RetryConfig {
    /// Fixed wait between fetch attempts, in milliseconds.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Maximum number of fetch attempts before degrading to the
    /// approximate display.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            max_attempts: default_max_attempts(),
        }
    }
}

fn default_interval_ms() -> u64 {
    2000
}
fn default_max_attempts() -> u32 {
    5
}
