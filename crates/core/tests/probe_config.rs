use imodels_core::config::ConfigError;
use imodels_core::probe::{built_for_simulator, source_from_config};
use imodels_core::{IdentifierSource, Platform, ProbeConfig};
use tempfile::tempdir;

#[test]
fn default_config_follows_build_target() {
    let config = ProbeConfig::default();
    assert_eq!(config.simulated, None);
    assert_eq!(config.simulator_variable, "SIMULATOR_MODEL_IDENTIFIER");
    assert_eq!(config.is_simulated(), built_for_simulator());
}

#[test]
fn explicit_flag_overrides_build_target() {
    let config = ProbeConfig { simulated: Some(true), ..ProbeConfig::default() };
    assert_eq!(source_from_config(&config).platform(), Platform::Simulator);

    let config = ProbeConfig { simulated: Some(false), ..ProbeConfig::default() };
    assert_eq!(source_from_config(&config).platform(), Platform::Native);
}

#[test]
fn loads_config_from_json_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("probe.json");
    std::fs::write(&path, r#"{ "simulated": true, "simulator_variable": "MY_SIM_ID" }"#).unwrap();

    let config = ProbeConfig::from_json_file(&path).expect("load config");
    assert_eq!(config.simulated, Some(true));
    assert_eq!(config.simulator_variable, "MY_SIM_ID");
}

#[test]
fn missing_fields_take_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("probe.json");
    std::fs::write(&path, "{}").unwrap();

    let config = ProbeConfig::from_json_file(&path).expect("load config");
    assert_eq!(config, ProbeConfig::default());
}

#[test]
fn config_serializes_without_unset_flag() {
    let json = serde_json::to_value(ProbeConfig::default()).unwrap();
    assert!(json.get("simulated").is_none());
    assert_eq!(json["simulator_variable"], "SIMULATOR_MODEL_IDENTIFIER");
}

#[test]
fn reports_unreadable_and_malformed_files() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    assert!(matches!(ProbeConfig::from_json_file(&missing), Err(ConfigError::Read { .. })));

    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "not json").unwrap();
    let err = ProbeConfig::from_json_file(&bad).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("bad.json"));
}
