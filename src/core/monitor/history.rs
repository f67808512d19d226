use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::sample::Sample;

const DEFAULT_CAPACITY: usize = 1000;

/// Bounded, durable log of collected samples.
///
/// Samples are kept in collection order in a single JSON file; once the
/// capacity is reached the oldest entries are dropped first. The store has a
/// single writer (the collector loop); concurrent readers see a stale or a
/// current file, never a partially written one.
pub struct HistoryStore {
    path: PathBuf,
    capacity: usize,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_capacity(path, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(path: impl Into<PathBuf>, capacity: usize) -> Self {
        Self {
            path: path.into(),
            capacity,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Read the persisted samples.
    ///
    /// A missing file yields an empty history; an unreadable or corrupt file
    /// is logged and likewise degrades to an empty history.
    pub fn load(&self) -> Vec<Sample> {
        if !self.path.exists() {
            return Vec::new();
        }

        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(err) => {
                log::warn!("Failed to read history file {:?}: {}", self.path, err);
                return Vec::new();
            }
        };

        match serde_json::from_slice(&data) {
            Ok(samples) => samples,
            Err(err) => {
                log::warn!("Corrupt history file {:?}: {}", self.path, err);
                Vec::new()
            }
        }
    }

    /// Append one sample, dropping the oldest entries beyond capacity.
    pub fn append(&self, sample: &Sample) -> Result<()> {
        let mut samples = self.load();
        samples.push(sample.clone());

        if samples.len() > self.capacity {
            let excess = samples.len() - self.capacity;
            samples.drain(..excess);
        }

        self.store(&samples)
    }

    // Whole-file replace via a sibling temp file, so readers never observe a
    // partially written history.
    fn store(&self, samples: &[Sample]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let data = serde_json::to_vec_pretty(samples)?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, data)?;
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }
}
