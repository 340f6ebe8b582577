use promptgen::{logger, StudioConfig};
use std::collections::HashMap;

#[test]
fn lines_logged_after_init_reach_the_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("promptgen.log");
    let vars: HashMap<&str, String> = HashMap::from([
        ("PROMPTGEN_LOG_FILE", path.to_str().unwrap().to_string()),
        ("PROMPTGEN_LOG_LEVEL", "info".to_string()),
    ]);

    let config = StudioConfig::from_vars(|key: &str| vars.get(key).cloned());
    logger::init_with_config(config.logger.clone()).unwrap();
    log::info!("✅ .env file loaded");
    log::debug!("below the configured level");

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains(".env file loaded"));
    assert!(!written.contains("below the configured level"));
}
