use anyhow::Result;
use clap::ArgMatches;
use colored::*;

use crate::core::monitor::{LiveSnapshot, SnapshotStatus, SystemProbe};

/// Show current cpu/memory utilization as text or JSON.
pub fn execute(matches: &ArgMatches) -> Result<()> {
    crate::init_logging();

    let mut probe = SystemProbe::new();
    let snapshot = LiveSnapshot::capture(&mut probe);

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    match snapshot.status {
        SnapshotStatus::Running => {
            println!("{}", "System status".white().bold());
            println!(
                "  CPU:    {}",
                format!("{:.1}%", snapshot.cpu_percent.unwrap_or(0.0)).cyan()
            );
            println!(
                "  Memory: {}",
                format!("{:.1}%", snapshot.memory_percent.unwrap_or(0.0)).cyan()
            );
            println!("  As of:  {}", snapshot.timestamp.to_rfc3339().dimmed());
        }
        SnapshotStatus::Unavailable => {
            println!("{}", "Stats unavailable".yellow());
        }
    }

    Ok(())
}
