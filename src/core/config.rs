use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Alert thresholds for the monitored metrics.
///
/// Supplied once at startup and never mutated while the collector runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub disk_percent: f64,
    pub temperature: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            cpu_percent: 80.0,
            memory_percent: 85.0,
            disk_percent: 90.0,
            temperature: 75.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    #[serde(default)]
    pub thresholds: Thresholds,
    /// File holding the rolling sample history
    #[serde(default = "default_history_path")]
    pub history_path: PathBuf,
    /// Mount point checked for disk usage
    #[serde(default = "default_disk_path")]
    pub disk_path: PathBuf,
    /// Wireless interface used for network counters and client counting
    #[serde(default = "default_wireless_interface")]
    pub wireless_interface: String,
    /// Seconds between the start of one collection and the next
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    /// Maximum number of samples kept in the history file
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
    /// Optional log file; console logging is always on
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_history_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pimon")
        .join("history.json")
}

fn default_disk_path() -> PathBuf {
    PathBuf::from("/")
}

fn default_wireless_interface() -> String {
    "wlan0".to_string()
}

fn default_interval_secs() -> u64 {
    60
}

fn default_history_capacity() -> usize {
    1000
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            history_path: default_history_path(),
            disk_path: default_disk_path(),
            wireless_interface: default_wireless_interface(),
            interval_secs: default_interval_secs(),
            history_capacity: default_history_capacity(),
            log_file: None,
        }
    }
}

impl MonitorConfig {
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            return Ok(MonitorConfig::default());
        }

        let data = fs::read(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        // An empty or corrupted file falls back to defaults
        // (this can happen when the config format changes)
        if data.is_empty() {
            return Ok(MonitorConfig::default());
        }

        Ok(serde_json::from_slice(&data).unwrap_or_default())
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let data = serde_json::to_vec_pretty(self).with_context(|| "Failed to serialize config")?;

        fs::write(&config_path, data)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    fn get_config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().with_context(|| "Could not determine config directory")?;

        Ok(config_dir.join("pimon").join("config.json"))
    }
}
