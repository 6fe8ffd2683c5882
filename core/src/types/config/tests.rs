use super::*;
use crate::types::{NodeKind, NodeTypeSet};
use tempfile::TempDir;

#[test]
fn load_missing_file_returns_default() {
    let dir = TempDir::new().unwrap();
    let path = AppConfig::path(dir.path());

    let config = AppConfig::load(&path).unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.search.refine_result_limit, 1000);
    assert_eq!(config.search.accepted_kinds, NodeTypeSet::all());
}

#[test]
fn save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = AppConfig::path(dir.path());

    let mut config = AppConfig::default();
    config.search.max_result_count = 25;
    config.search.max_best_scored_results_length = 80;
    config.search.accepted_kinds = [NodeKind::Class, NodeKind::Function].into_iter().collect();
    config.save(&path).unwrap();

    let loaded = AppConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = AppConfig::path(dir.path());
    std::fs::write(&path, "[search]\nmax_result_count = 10\n").unwrap();

    let config = AppConfig::load(&path).unwrap();

    assert_eq!(config.search.max_result_count, 10);
    assert_eq!(config.search.max_best_scored_results_length, 0);
    assert_eq!(config.search.refine_result_limit, 1000);
    assert_eq!(config.search.accepted_kinds, NodeTypeSet::all());
}

#[test]
fn invalid_toml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = AppConfig::path(dir.path());
    std::fs::write(&path, "[search\nmax_result_count = ").unwrap();

    let err = AppConfig::load(&path).unwrap_err();
    assert!(matches!(err, AppConfigError::Parse(_)));
}

#[test]
fn unknown_kind_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = AppConfig::path(dir.path());
    std::fs::write(&path, "[search]\naccepted_kinds = [\"gadget\"]\n").unwrap();

    let err = AppConfig::load(&path).unwrap_err();
    assert!(matches!(err, AppConfigError::Parse(_)));
}

#[test]
fn empty_accepted_kinds_is_invalid() {
    let mut config = AppConfig::default();
    config.search.accepted_kinds = NodeTypeSet::none();

    assert_eq!(config.validate().len(), 1);

    let fixed = config.with_defaults_for_invalid();
    assert!(fixed.validate().is_empty());
    assert_eq!(fixed.search.accepted_kinds, NodeTypeSet::all());
}

#[test]
fn load_from_dir_repairs_invalid_values() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        AppConfig::path(dir.path()),
        "[search]\nmax_result_count = 7\naccepted_kinds = []\n",
    )
    .unwrap();

    let config = AppConfig::load_from_dir(dir.path()).unwrap();

    assert_eq!(config.search.max_result_count, 7);
    assert_eq!(config.search.accepted_kinds, NodeTypeSet::all());
}

#[test]
fn load_from_dir_reports_parse_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(AppConfig::path(dir.path()), "[search\n").unwrap();

    let err = AppConfig::load_from_dir(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        crate::Error::Config(AppConfigError::Parse(_))
    ));
}
