//! The collector loop driving sampling, alerting, and persistence.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::core::config::{MonitorConfig, Thresholds};

use super::alerts::evaluate_alerts;
use super::history::HistoryStore;
use super::sampler::Sampler;

/// Granularity at which the sleep between ticks checks the shutdown flag.
const SHUTDOWN_POLL: Duration = Duration::from_millis(250);

/// Drives collect -> evaluate -> persist on a fixed period.
///
/// Each tick sleeps the full period after finishing; collection time is not
/// subtracted from the interval.
pub struct CollectorLoop {
    sampler: Sampler,
    thresholds: Thresholds,
    history: HistoryStore,
    period: Duration,
    shutdown: Arc<AtomicBool>,
}

impl CollectorLoop {
    pub fn new(config: &MonitorConfig) -> Self {
        Self {
            sampler: Sampler::new(config),
            thresholds: config.thresholds,
            history: HistoryStore::with_capacity(&config.history_path, config.history_capacity),
            period: Duration::from_secs(config.interval_secs),
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flag that stops the loop when set; hand this to a signal handler.
    pub fn shutdown_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.shutdown)
    }

    /// Run until the shutdown flag is set.
    ///
    /// A failed tick is logged and the loop sleeps the usual period before
    /// trying again; nothing short of the shutdown flag stops collection.
    pub fn run(&mut self) {
        log::info!("System monitor started");

        while !self.shutdown.load(Ordering::SeqCst) {
            if let Err(err) = self.tick() {
                log::error!("Monitor error: {}", err);
            }
            self.sleep_period();
        }

        log::info!("Monitor stopped");
    }

    /// One collection cycle: sample, log a summary, evaluate alerts, persist.
    pub fn tick(&mut self) -> crate::Result<()> {
        let sample = self.sampler.collect();

        log::info!(
            "CPU: {:.1}%, Memory: {:.1}%, Clients: {}",
            sample.cpu_percent,
            sample.memory.percent,
            sample.connected_clients
        );

        for alert in evaluate_alerts(&sample, &self.thresholds) {
            log::warn!("{}", alert);
        }

        // A failed write must not take down the loop; the sample is simply
        // lost and the next tick proceeds
        if let Err(err) = self.history.append(&sample) {
            log::error!("Failed to save stats: {}", err);
        }

        Ok(())
    }

    fn sleep_period(&self) {
        let mut remaining = self.period;
        while !self.shutdown.load(Ordering::SeqCst) && !remaining.is_zero() {
            let step = remaining.min(SHUTDOWN_POLL);
            thread::sleep(step);
            remaining -= step;
        }
    }
}
