use pimon::core::monitor::{CollectorLoop, HistoryStore};
use pimon::MonitorConfig;
use tempfile::TempDir;

#[test]
fn test_tick_appends_samples_to_history() {
    let dir = TempDir::new().unwrap();
    let history_path = dir.path().join("history.json");

    let config = MonitorConfig {
        history_path: history_path.clone(),
        ..Default::default()
    };

    let mut collector = CollectorLoop::new(&config);
    collector.tick().unwrap();
    collector.tick().unwrap();

    let store = HistoryStore::new(&history_path);
    assert_eq!(store.load().len(), 2);
}

#[test]
fn test_failed_persistence_does_not_block_ticks() {
    let dir = TempDir::new().unwrap();

    // The history path's parent is a regular file, so every write fails
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"x").unwrap();

    let config = MonitorConfig {
        history_path: blocker.join("history.json"),
        ..Default::default()
    };

    let mut collector = CollectorLoop::new(&config);
    assert!(collector.tick().is_ok());
    assert!(collector.tick().is_ok());
}

#[test]
fn test_history_respects_configured_capacity() {
    let dir = TempDir::new().unwrap();
    let history_path = dir.path().join("history.json");

    let config = MonitorConfig {
        history_path: history_path.clone(),
        history_capacity: 2,
        ..Default::default()
    };

    let mut collector = CollectorLoop::new(&config);
    collector.tick().unwrap();
    collector.tick().unwrap();
    collector.tick().unwrap();

    let store = HistoryStore::new(&history_path);
    assert_eq!(store.load().len(), 2);
}
