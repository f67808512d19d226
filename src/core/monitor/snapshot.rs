use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::probe::SystemProbe;

/// Point-in-time cpu/memory view served to dashboard consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_percent: Option<f64>,
    pub timestamp: DateTime<Utc>,
    pub status: SnapshotStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotStatus {
    Running,
    Unavailable,
}

impl LiveSnapshot {
    /// Capture current cpu and memory utilization.
    ///
    /// A failed memory probe yields an `unavailable` snapshot with null
    /// percentages instead of an error.
    pub fn capture(probe: &mut SystemProbe) -> Self {
        let cpu = probe.cpu_percent();
        let memory = probe.memory_info();
        let timestamp = Utc::now();

        if memory.total == 0 {
            return Self {
                cpu_percent: None,
                memory_percent: None,
                timestamp,
                status: SnapshotStatus::Unavailable,
            };
        }

        Self {
            cpu_percent: Some(cpu),
            memory_percent: Some(memory.percent),
            timestamp,
            status: SnapshotStatus::Running,
        }
    }
}
