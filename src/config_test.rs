use std::collections::HashMap;

use super::*;

fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_unset() {
    let cfg = config(&[]).unwrap();
    assert_eq!(cfg.home, PathBuf::from(DEFAULT_HOME));
    assert_eq!(cfg.log_level, Level::INFO);
    assert_eq!(cfg.seed, None);
}

#[test]
fn parses_every_variable() {
    let cfg = config(&[("LESSON_HOME", "/tmp/lessons"), ("LESSON_LOG", "Debug"), ("LESSON_SEED", " 42 ")]).unwrap();
    assert_eq!(cfg.home, PathBuf::from("/tmp/lessons"));
    assert_eq!(cfg.log_level, Level::DEBUG);
    assert_eq!(cfg.seed, Some(42));
}

#[test]
fn empty_values_count_as_unset() {
    let cfg = config(&[("LESSON_HOME", ""), ("LESSON_LOG", "  ")]).unwrap();
    assert_eq!(cfg.home, PathBuf::from(DEFAULT_HOME));
    assert_eq!(cfg.log_level, Level::INFO);
}

#[test]
fn log_level_is_case_insensitive() {
    assert_eq!(config(&[("LESSON_LOG", " WARN ")]).unwrap().log_level, Level::WARN);
    assert_eq!(config(&[("LESSON_LOG", "trace")]).unwrap().log_level, Level::TRACE);
}

#[test]
fn invalid_log_level_errors() {
    let err = config(&[("LESSON_LOG", "loud")]).unwrap_err();
    assert_eq!(err, ConfigError::LogLevel("loud".into()));
    assert!(err.to_string().contains("LESSON_LOG"));
}

#[test]
fn invalid_seed_errors() {
    assert_eq!(config(&[("LESSON_SEED", "-1")]).unwrap_err(), ConfigError::Seed("-1".into()));
}

#[test]
fn overrides_win() {
    let cfg = config(&[("LESSON_SEED", "7")])
        .unwrap()
        .with_overrides(Some(PathBuf::from("elsewhere")), None);
    assert_eq!(cfg.home, PathBuf::from("elsewhere"));
    assert_eq!(cfg.seed, Some(7));
    assert_eq!(cfg.with_overrides(None, Some(9)).seed, Some(9));
}
