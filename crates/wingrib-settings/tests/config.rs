use wingrib_settings::{ExportConfig, SettingsError};

#[test]
fn test_toml_round_trip() {
    let mut config = ExportConfig::default();
    config.sheet.width = 900.0;
    config.sheet_svg.apply_kerf = true;
    config.parts.include_spars = true;
    config.plan_svg.show_labels = false;

    let text = config.to_toml_string().unwrap();
    assert!(text.contains("[sheet]"));
    assert!(text.contains("apply_kerf = true"));
    assert_eq!(ExportConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn test_json_round_trip() {
    let mut config = ExportConfig::default();
    config.sheet.spacing = 3.0;
    let text = config.to_json_string().unwrap();
    assert_eq!(ExportConfig::from_json_str(&text).unwrap(), config);
}

#[test]
fn test_partial_toml_uses_defaults() {
    let config = ExportConfig::from_toml_str(
        r#"
[sheet]
width = 450.0
height = 450.0
"#,
    )
    .unwrap();
    assert_eq!(config.sheet.width, 450.0);
    assert_eq!(config.sheet.margin, 10.0);
    assert!(config.plan_svg.show_rib_stations);
}

#[test]
fn test_invalid_values_are_rejected_on_load() {
    let result = ExportConfig::from_toml_str(
        r#"
[sheet]
width = 0.0
"#,
    );
    assert!(matches!(
        result,
        Err(SettingsError::InvalidSetting { ref key, .. }) if key == "sheet.width"
    ));

    let result = ExportConfig::from_toml_str("[sheet]\nwidth = \"wide\"\n");
    assert!(matches!(result, Err(SettingsError::TomlError(_))));

    let result = ExportConfig::from_json_str("{\"plan_svg\": {\"margin\": -1.0}}");
    assert!(matches!(
        result,
        Err(SettingsError::InvalidSetting { ref key, .. }) if key == "plan_svg.margin"
    ));
}
