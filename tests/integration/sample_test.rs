use chrono::Utc;
use pimon::core::monitor::{DiskStats, MemoryStats, NetworkStats, Sample};

fn full_sample() -> Sample {
    Sample {
        timestamp: Utc::now(),
        cpu_percent: 23.4,
        memory: MemoryStats {
            total: 4_000_000_000,
            used: 1_000_000_000,
            available: 3_000_000_000,
            percent: 25.0,
        },
        disk: DiskStats {
            total: 32_000_000_000,
            used: 8_000_000_000,
            free: 24_000_000_000,
            percent: 25.0,
        },
        network: Some(NetworkStats {
            bytes_sent: 1024,
            bytes_recv: 2048,
            packets_sent: 10,
            packets_recv: 20,
        }),
        temperature: Some(48.3),
        connected_clients: 3,
    }
}

#[test]
fn test_persisted_schema_shape() {
    let value = serde_json::to_value(full_sample()).unwrap();

    assert!(value["timestamp"].is_string());
    assert!(value["cpu_percent"].is_number());
    assert!(value["memory"]["percent"].is_number());
    assert!(value["disk"]["used"].is_number());
    assert!(value["disk"]["total"].is_number());
    assert_eq!(value["network"]["bytes_sent"], 1024);
    assert_eq!(value["temperature"], 48.3);
    assert_eq!(value["connected_clients"], 3);
}

#[test]
fn test_degraded_fields_serialize_as_empty_and_null() {
    let mut sample = full_sample();
    sample.network = None;
    sample.temperature = None;

    let value = serde_json::to_value(&sample).unwrap();

    assert_eq!(value["network"], serde_json::json!({}));
    assert!(value["temperature"].is_null());
}

#[test]
fn test_sample_round_trips() {
    let sample = full_sample();

    let json = serde_json::to_string_pretty(&sample).unwrap();
    let decoded: Sample = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded.timestamp, sample.timestamp);
    assert_eq!(decoded.cpu_percent, sample.cpu_percent);
    assert_eq!(decoded.memory, sample.memory);
    assert_eq!(decoded.disk, sample.disk);
    assert_eq!(decoded.network, sample.network);
    assert_eq!(decoded.temperature, sample.temperature);
    assert_eq!(decoded.connected_clients, sample.connected_clients);
}
