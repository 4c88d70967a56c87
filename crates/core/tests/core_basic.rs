use imodels_core::{identifier, model_name, model_name_for, version};

#[test]
fn version_is_non_empty() {
    let v = version();
    assert!(!v.is_empty());
}

#[test]
fn host_identifier_is_non_empty() {
    let id = identifier().expect("host identifier");
    assert!(!id.is_empty());
}

#[test]
fn host_model_name_matches_catalog_or_falls_back() {
    let id = identifier().expect("host identifier");
    let base = model_name_for(&id).map(str::to_string).unwrap_or_else(|| id.clone());
    let name = model_name().expect("host model name");
    if imodels_core::probe::built_for_simulator() {
        assert_eq!(name, format!("{base} Simulator"));
    } else {
        assert_eq!(name, base);
    }
    assert!(!name.is_empty());
}
