//! Logging reaches a configured file at the configured level.
//!
//! Kept in its own test binary: the subscriber is process-global.

use pythonic::{init_with_config, len, range, RuntimeConfig};
use std::collections::HashSet;
use std::fs;

#[test]
fn test_builtin_events_reach_log_file() {
    std::env::remove_var("RUST_LOG");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("builtins.log");

    let mut config = RuntimeConfig::default();
    config.log.level = "trace".to_string();
    config.log.file = Some(path.to_string_lossy().into_owned());
    init_with_config(&config);

    assert_eq!(range(3), vec![0, 1, 2]);
    let hashed: HashSet<i64> = [1, 2, 3].into_iter().collect();
    assert_eq!(len(&hashed), 3);

    let log = fs::read_to_string(&path).unwrap();
    assert!(log.contains("pythonic logging initialized"), "{}", log);
    assert!(log.contains("materializing sequence"), "{}", log);
    assert!(log.contains("builtin function called"), "{}", log);
    assert!(log.contains("walked a forward-only container"), "{}", log);
    assert!(!log.contains('\u{1b}'), "escape codes in log file: {}", log);
}
