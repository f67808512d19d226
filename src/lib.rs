// Pimon Library - Public API

// Re-export error types
pub mod error;
pub use error::{PimonError, Result};

// Module declarations
pub mod commands;
pub mod core;

// Re-export commonly used types
pub use crate::core::config::{MonitorConfig, Thresholds};

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

// Initialize logging
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}

/// Initialize logging to both the console and a log file.
pub fn init_logging_with_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .target(env_logger::Target::Pipe(Box::new(TeeWriter { file })))
        .init();
    Ok(())
}

/// Writer that sends log output to stderr and a file at the same time.
struct TeeWriter {
    file: std::fs::File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.flush()
    }
}
