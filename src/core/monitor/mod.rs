//! Host health monitoring: probes, sampling, alert evaluation, and the
//! bounded sample history.

pub mod alerts;
pub mod history;
pub mod probe;
pub mod runtime;
pub mod sample;
pub mod sampler;
pub mod snapshot;

pub use alerts::evaluate_alerts;
pub use history::HistoryStore;
pub use probe::SystemProbe;
pub use runtime::CollectorLoop;
pub use sample::{DiskStats, MemoryStats, NetworkStats, Sample};
pub use sampler::Sampler;
pub use snapshot::{LiveSnapshot, SnapshotStatus};
