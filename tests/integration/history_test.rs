use chrono::Utc;
use pimon::core::monitor::{DiskStats, HistoryStore, MemoryStats, Sample};
use tempfile::TempDir;

fn make_sample(cpu: f64) -> Sample {
    Sample {
        timestamp: Utc::now(),
        cpu_percent: cpu,
        memory: MemoryStats {
            total: 1000,
            used: 500,
            available: 500,
            percent: 50.0,
        },
        disk: DiskStats {
            total: 1000,
            used: 500,
            free: 500,
            percent: 50.0,
        },
        network: None,
        temperature: Some(42.0),
        connected_clients: 1,
    }
}

#[test]
fn test_load_missing_file_returns_empty() {
    let dir = TempDir::new().unwrap();
    let store = HistoryStore::new(dir.path().join("history.json"));

    assert!(store.load().is_empty());
}

#[test]
fn test_default_capacity_is_one_thousand() {
    let store = HistoryStore::new("history.json");
    assert_eq!(store.capacity(), 1000);
}

#[test]
fn test_append_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let store = HistoryStore::new(dir.path().join("history.json"));

    store.append(&make_sample(12.5)).unwrap();
    store.append(&make_sample(99.9)).unwrap();

    let samples = store.load();
    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0].cpu_percent, 12.5);
    assert_eq!(samples.last().unwrap().cpu_percent, 99.9);
}

#[test]
fn test_eviction_drops_oldest_first() {
    let dir = TempDir::new().unwrap();
    let store = HistoryStore::with_capacity(dir.path().join("history.json"), 5);

    for i in 0..8 {
        store.append(&make_sample(i as f64)).unwrap();
    }

    let samples = store.load();
    assert_eq!(samples.len(), 5);

    // The kept window is the last 5 appended, in original order
    let kept: Vec<f64> = samples.iter().map(|s| s.cpu_percent).collect();
    assert_eq!(kept, vec![3.0, 4.0, 5.0, 6.0, 7.0]);
}

#[test]
fn test_corrupt_file_degrades_to_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, b"not json at all {{{").unwrap();

    let store = HistoryStore::new(&path);
    assert!(store.load().is_empty());
}

#[test]
fn test_append_replaces_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, b"[{\"broken\": ").unwrap();

    let store = HistoryStore::new(&path);
    store.append(&make_sample(33.0)).unwrap();

    let samples = store.load();
    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].cpu_percent, 33.0);
}

#[test]
fn test_store_is_pretty_printed_json_array() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.json");

    let store = HistoryStore::new(&path);
    store.append(&make_sample(1.0)).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with('['));
    assert!(text.contains('\n'));

    // Timestamps persist as ISO-8601 strings
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert!(value[0]["timestamp"].is_string());
}

#[test]
fn test_append_leaves_no_temp_file_behind() {
    let dir = TempDir::new().unwrap();
    let store = HistoryStore::new(dir.path().join("history.json"));

    store.append(&make_sample(1.0)).unwrap();

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(entries, vec!["history.json".to_string()]);
}

#[test]
fn test_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("logs").join("history.json");

    let store = HistoryStore::new(&path);
    store.append(&make_sample(1.0)).unwrap();

    assert_eq!(store.load().len(), 1);
}
