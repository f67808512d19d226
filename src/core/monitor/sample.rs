use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timestamped snapshot of all monitored metrics.
///
/// Every field degrades independently: a probe failure zeroes or clears the
/// affected field without invalidating the rest of the sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub cpu_percent: f64,
    pub memory: MemoryStats,
    pub disk: DiskStats,
    /// Counters for the wireless interface; persisted as `{}` when the
    /// interface is absent
    #[serde(
        default,
        serialize_with = "net_serde::serialize",
        deserialize_with = "net_serde::deserialize"
    )]
    pub network: Option<NetworkStats>,
    pub temperature: Option<f64>,
    pub connected_clients: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryStats {
    pub total: u64,
    pub used: u64,
    pub available: u64,
    pub percent: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DiskStats {
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub percent: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkStats {
    pub bytes_sent: u64,
    pub bytes_recv: u64,
    pub packets_sent: u64,
    pub packets_recv: u64,
}

/// Serde helpers mapping `None` network counters to an empty JSON object,
/// matching the persisted history schema.
mod net_serde {
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::NetworkStats;

    pub fn serialize<S>(value: &Option<NetworkStats>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(stats) => stats.serialize(serializer),
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NetworkStats>, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Partial {
            bytes_sent: Option<u64>,
            bytes_recv: Option<u64>,
            packets_sent: Option<u64>,
            packets_recv: Option<u64>,
        }

        let partial = Partial::deserialize(deserializer)?;
        match (
            partial.bytes_sent,
            partial.bytes_recv,
            partial.packets_sent,
            partial.packets_recv,
        ) {
            (Some(bytes_sent), Some(bytes_recv), Some(packets_sent), Some(packets_recv)) => {
                Ok(Some(NetworkStats {
                    bytes_sent,
                    bytes_recv,
                    packets_sent,
                    packets_recv,
                }))
            }
            _ => Ok(None),
        }
    }
}
