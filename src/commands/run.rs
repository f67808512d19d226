use std::path::PathBuf;
use std::sync::atomic::Ordering;

use anyhow::Result;
use clap::ArgMatches;

use crate::core::config::MonitorConfig;
use crate::core::monitor::CollectorLoop;

/// Run the collector loop in the foreground until interrupted.
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let mut config = MonitorConfig::load()?;

    if let Some(interval) = matches.get_one::<u64>("interval") {
        config.interval_secs = *interval;
    }
    if let Some(path) = matches.get_one::<String>("history-file") {
        config.history_path = PathBuf::from(path);
    }
    if let Some(interface) = matches.get_one::<String>("interface") {
        config.wireless_interface = interface.clone();
    }
    if let Some(path) = matches.get_one::<String>("log-file") {
        config.log_file = Some(PathBuf::from(path));
    }

    match &config.log_file {
        Some(path) => crate::init_logging_with_file(path)?,
        None => crate::init_logging(),
    }

    let mut collector = CollectorLoop::new(&config);

    let shutdown = collector.shutdown_handle();
    ctrlc::set_handler(move || shutdown.store(true, Ordering::SeqCst))?;

    collector.run();

    Ok(())
}
