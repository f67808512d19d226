// Core business logic module

pub mod config;
pub mod monitor;

// Re-export commonly used items
pub use config::{MonitorConfig, Thresholds};
pub use monitor::{CollectorLoop, HistoryStore, LiveSnapshot, Sample, Sampler, SystemProbe};
