//! OS and hardware queries behind a failure-isolating boundary.
//!
//! Hardware and command-line tooling availability varies across deployments,
//! so every query returns a defined "unavailable" value instead of an error.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::thread;

use sysinfo::{CpuRefreshKind, Disks, MemoryRefreshKind, Networks, RefreshKind, System};

use super::sample::{DiskStats, MemoryStats, NetworkStats};

const TEMPERATURE_CMD: &str = "vcgencmd";
const WIRELESS_CMD: &str = "iw";

/// Collects raw metrics from the operating system and vendor tools.
pub struct SystemProbe {
    system: System,
    disks: Disks,
    networks: Networks,
    temperature_cmd: Option<PathBuf>,
    wireless_cmd: Option<PathBuf>,
}

impl SystemProbe {
    pub fn new() -> Self {
        let refresh_kind = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::everything())
            .with_memory(MemoryRefreshKind::everything());

        Self {
            system: System::new_with_specifics(refresh_kind),
            disks: Disks::new_with_refreshed_list(),
            networks: Networks::new_with_refreshed_list(),
            temperature_cmd: which::which(TEMPERATURE_CMD).ok(),
            wireless_cmd: which::which(WIRELESS_CMD).ok(),
        }
    }

    /// CPU utilization in percent over a short sampling window.
    pub fn cpu_percent(&mut self) -> f64 {
        self.system.refresh_cpu_all();
        thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
        self.system.refresh_cpu_all();
        self.system.global_cpu_usage() as f64
    }

    pub fn memory_info(&mut self) -> MemoryStats {
        self.system.refresh_memory();

        let total = self.system.total_memory();
        let used = self.system.used_memory();

        MemoryStats {
            total,
            used,
            available: self.system.available_memory(),
            percent: if total > 0 {
                (used as f64 / total as f64) * 100.0
            } else {
                0.0
            },
        }
    }

    /// Usage of the disk mounted at `path`; zeroed stats if no such mount.
    pub fn disk_info(&mut self, path: &Path) -> DiskStats {
        self.disks.refresh(true);

        let disk = match self.disks.iter().find(|d| d.mount_point() == path) {
            Some(disk) => disk,
            None => return DiskStats::default(),
        };

        let total = disk.total_space();
        let free = disk.available_space();
        let used = total.saturating_sub(free);

        DiskStats {
            total,
            used,
            free,
            percent: if total > 0 {
                (used as f64 / total as f64) * 100.0
            } else {
                0.0
            },
        }
    }

    /// Cumulative traffic counters for the named interface, if present.
    pub fn network_counters(&mut self, interface: &str) -> Option<NetworkStats> {
        self.networks.refresh(true);

        self.networks
            .iter()
            .find(|(name, _)| name.as_str() == interface)
            .map(|(_, data)| NetworkStats {
                bytes_sent: data.total_transmitted(),
                bytes_recv: data.total_received(),
                packets_sent: data.total_packets_transmitted(),
                packets_recv: data.total_packets_received(),
            })
    }

    /// CPU temperature in degrees Celsius, read through the vendor tool.
    pub fn cpu_temperature(&self) -> Option<f64> {
        let cmd = self.temperature_cmd.as_ref()?;

        let output = Command::new(cmd).arg("measure_temp").output().ok()?;
        if !output.status.success() {
            return None;
        }

        parse_temperature(&String::from_utf8_lossy(&output.stdout))
    }

    /// Number of stations associated with the wireless interface.
    pub fn wireless_client_count(&self, interface: &str) -> u32 {
        let cmd = match self.wireless_cmd.as_ref() {
            Some(cmd) => cmd,
            None => return 0,
        };

        let output = match Command::new(cmd)
            .args(["dev", interface, "station", "dump"])
            .output()
        {
            Ok(output) => output,
            Err(_) => return 0,
        };
        if !output.status.success() {
            return 0;
        }

        count_stations(&String::from_utf8_lossy(&output.stdout))
    }
}

impl Default for SystemProbe {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse `temp=48.3'C` style output into degrees.
fn parse_temperature(output: &str) -> Option<f64> {
    let value = output.trim().strip_prefix("temp=")?;
    let (degrees, _unit) = value.split_once('\'')?;
    degrees.parse().ok()
}

fn count_stations(output: &str) -> u32 {
    output.matches("Station ").count() as u32
}
