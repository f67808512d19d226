use std::path::PathBuf;

use chrono::Utc;

use crate::core::config::MonitorConfig;

use super::probe::SystemProbe;
use super::sample::Sample;

/// Produces one complete [`Sample`] per invocation.
///
/// Probe failures degrade individual fields; no failure aborts the rest of
/// the collection and no probe is retried.
pub struct Sampler {
    probe: SystemProbe,
    disk_path: PathBuf,
    wireless_interface: String,
}

impl Sampler {
    pub fn new(config: &MonitorConfig) -> Self {
        Self {
            probe: SystemProbe::new(),
            disk_path: config.disk_path.clone(),
            wireless_interface: config.wireless_interface.clone(),
        }
    }

    pub fn collect(&mut self) -> Sample {
        let timestamp = Utc::now();

        Sample {
            timestamp,
            cpu_percent: self.probe.cpu_percent(),
            memory: self.probe.memory_info(),
            disk: self.probe.disk_info(&self.disk_path),
            network: self.probe.network_counters(&self.wireless_interface),
            temperature: self.probe.cpu_temperature(),
            connected_clients: self.probe.wireless_client_count(&self.wireless_interface),
        }
    }
}
