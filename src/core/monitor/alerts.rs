//! Alert evaluation for collected samples.
//!
//! Compares a sample against the configured thresholds and produces
//! human-readable alert messages.

use crate::core::config::Thresholds;

use super::sample::Sample;

/// Evaluate a sample against thresholds and generate alert messages.
///
/// A metric alerts only when strictly above its threshold; equality stays
/// quiet. Alerts come out in a fixed order: cpu, memory, disk, temperature.
pub fn evaluate_alerts(sample: &Sample, thresholds: &Thresholds) -> Vec<String> {
    let mut alerts = Vec::new();

    if sample.cpu_percent > thresholds.cpu_percent {
        alerts.push(format!("High CPU usage: {:.1}%", sample.cpu_percent));
    }

    if sample.memory.percent > thresholds.memory_percent {
        alerts.push(format!("High memory usage: {:.1}%", sample.memory.percent));
    }

    // Recomputed from the raw counters so stored and evaluated values cannot drift
    let disk_percent = if sample.disk.total > 0 {
        (sample.disk.used as f64 / sample.disk.total as f64) * 100.0
    } else {
        0.0
    };
    if disk_percent > thresholds.disk_percent {
        alerts.push(format!("High disk usage: {:.1}%", disk_percent));
    }

    if let Some(temperature) = sample.temperature {
        if temperature > thresholds.temperature {
            alerts.push(format!("High temperature: {:.1}°C", temperature));
        }
    }

    alerts
}
