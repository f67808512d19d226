use anyhow::Result;
use clap::ArgMatches;
use colored::*;
use humansize::{format_size, BINARY};

use crate::core::config::MonitorConfig;
use crate::core::monitor::{HistoryStore, Sample};

const DEFAULT_COUNT: usize = 10;

/// Show the most recently recorded samples.
pub fn execute(matches: &ArgMatches) -> Result<()> {
    crate::init_logging();

    let config = MonitorConfig::load()?;
    let store = HistoryStore::with_capacity(&config.history_path, config.history_capacity);

    let count = matches
        .get_one::<usize>("count")
        .copied()
        .unwrap_or(DEFAULT_COUNT);

    let samples = store.load();
    let recent = &samples[samples.len().saturating_sub(count)..];

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(recent)?);
        return Ok(());
    }

    if recent.is_empty() {
        println!("{}", "No samples recorded yet.".yellow());
        println!();
        println!("{}", "To start the collector, run:".white());
        println!("  {}", "pimon run".cyan().bold());
        return Ok(());
    }

    for sample in recent {
        print_sample(sample);
    }

    Ok(())
}

fn print_sample(sample: &Sample) {
    let temperature = match sample.temperature {
        Some(temp) => format!("{:.1}°C", temp),
        None => "n/a".to_string(),
    };

    println!(
        "{}  CPU {}  Mem {} ({})  Disk {}  Temp {}  Clients {}",
        sample.timestamp.to_rfc3339().dimmed(),
        format!("{:>5.1}%", sample.cpu_percent).cyan(),
        format!("{:>5.1}%", sample.memory.percent).cyan(),
        format_size(sample.memory.used, BINARY),
        format!("{:>5.1}%", sample.disk.percent).cyan(),
        temperature,
        sample.connected_clients
    );
}
