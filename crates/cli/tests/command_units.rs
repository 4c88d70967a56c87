use imodels::commands::{
    catalog_entries, current_report, list_command, lookup, lookup_command, parse_family,
};
use imodels::resolve_probe_config;
use imodels_core::{DeviceFamily, Platform, ProbeConfig};
use tempfile::tempdir;

#[test]
fn lookup_resolves_known_identifier() {
    let result = lookup("iPad16,6");
    assert_eq!(result.model_name, "iPad Pro 13-inch (M4)");
    assert_eq!(result.family, Some(DeviceFamily::IPad));
    assert!(result.known);
}

#[test]
fn lookup_falls_back_to_identifier() {
    let result = lookup("iPhone99,1");
    assert_eq!(result.model_name, "iPhone99,1");
    assert_eq!(result.family, Some(DeviceFamily::IPhone));
    assert!(!result.known);
}

#[test]
fn lookup_command_succeeds_for_any_input() {
    lookup_command("iPhone8,2", false).unwrap();
    lookup_command("garbage", true).unwrap();
}

#[test]
fn parses_known_families() {
    assert_eq!(parse_family("watch").unwrap(), DeviceFamily::Watch);
    assert_eq!(parse_family("apple_tv").unwrap(), DeviceFamily::AppleTv);
}

#[test]
fn rejects_unknown_family() {
    let err = parse_family("Watch").unwrap_err();
    assert!(err.to_string().contains("Invalid family"));
    assert!(err.to_string().contains("reality_device"));
}

#[test]
fn catalog_entries_filter_by_family() {
    let ipods = catalog_entries(Some(DeviceFamily::IPod));
    assert_eq!(ipods.len(), 7);
    assert!(ipods.iter().all(|e| e.identifier.starts_with("iPod")));
    assert!(catalog_entries(None).len() > ipods.len());
}

#[test]
fn list_command_succeeds_in_both_modes() {
    list_command(None, false).unwrap();
    list_command(Some("ipad"), true).unwrap();
    assert!(list_command(Some("toaster"), false).is_err());
}

#[test]
fn probe_config_defaults_without_file_or_flags() {
    let config = resolve_probe_config(None, false, None).unwrap();
    assert_eq!(config, ProbeConfig::default());
}

#[test]
fn probe_config_flags_override_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("probe.json");
    std::fs::write(&path, r#"{ "simulated": false, "simulator_variable": "FROM_FILE" }"#).unwrap();

    let from_file = resolve_probe_config(Some(path.as_path()), false, None).unwrap();
    assert_eq!(from_file.simulated, Some(false));
    assert_eq!(from_file.simulator_variable, "FROM_FILE");

    let overridden =
        resolve_probe_config(Some(path.as_path()), true, Some("FROM_FLAG".into())).unwrap();
    assert_eq!(overridden.simulated, Some(true));
    assert_eq!(overridden.simulator_variable, "FROM_FLAG");
}

#[test]
fn probe_config_reports_bad_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "[").unwrap();
    let err = resolve_probe_config(Some(path.as_path()), false, None).unwrap_err();
    assert!(err.to_string().contains("Failed to load probe config"));
}

#[test]
fn current_report_uses_configured_simulator() {
    std::env::set_var("IMODELS_UNIT_SIM_REPORT", "iPod9,1");
    let config = ProbeConfig {
        simulated: Some(true),
        simulator_variable: "IMODELS_UNIT_SIM_REPORT".into(),
    };
    let report = current_report(&config).unwrap();
    assert_eq!(report.model_name, "iPod touch (7th generation) Simulator");
    assert_eq!(report.platform, Platform::Simulator);
}

#[test]
fn current_report_fails_without_simulator_variable() {
    std::env::remove_var("IMODELS_UNIT_SIM_ABSENT");
    let config = ProbeConfig {
        simulated: Some(true),
        simulator_variable: "IMODELS_UNIT_SIM_ABSENT".into(),
    };
    let err = current_report(&config).unwrap_err();
    assert!(format!("{err:#}").contains("IMODELS_UNIT_SIM_ABSENT"));
}
