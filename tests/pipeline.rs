use wingrib::{export_plan, export_sheets, ExportConfig, WingSpec};

#[test]
fn test_default_wing_exports_sheets() {
    let spec = WingSpec::default();
    let sheets = export_sheets(&spec, &ExportConfig::default()).unwrap();

    assert!(!sheets.is_empty());
    let labels: usize = sheets.iter().map(|s| s.svg.matches("<text").count()).sum();
    assert_eq!(labels, spec.rib_count_per_half as usize);
    for sheet in &sheets {
        assert!(sheet.svg.contains("<g id=\"CUT\""));
        assert!(sheet.warnings.is_empty());
    }
}

#[test]
fn test_spar_parts_are_exported_when_enabled() {
    let spec = WingSpec::default();
    let mut config = ExportConfig::default();
    config.parts.include_spars = true;
    // spars are longer than the default sheet
    config.sheet.width = 1000.0;
    config.sheet.height = 1000.0;

    let sheets = export_sheets(&spec, &config).unwrap();
    let all: String = sheets.iter().map(|s| s.svg.as_str()).collect();
    for k in 0..spec.spars.len() {
        assert!(all.contains(&format!(">spar-{}</text>", k)));
    }
}

#[test]
fn test_oversize_spar_warning_reaches_caller() {
    let spec = WingSpec::default();
    let mut config = ExportConfig::default();
    // spars run the full half-span, longer than a 600x300 sheet allows
    config.parts.include_spars = true;

    let sheets = export_sheets(&spec, &config).unwrap();
    let warnings: Vec<&String> = sheets.iter().flat_map(|s| &s.warnings).collect();
    assert_eq!(warnings.len(), spec.spars.len());
    assert!(warnings
        .iter()
        .any(|w| w.starts_with("spar-0 exceeds usable area (580x280)")));
}

#[test]
fn test_invalid_spec_is_reported() {
    let spec = WingSpec {
        span: -1.0,
        ..WingSpec::default()
    };
    let err = export_sheets(&spec, &ExportConfig::default()).unwrap_err();
    assert!(err.to_string().contains("failed to generate wing"));
}

#[test]
fn test_invalid_config_is_reported() {
    let mut config = ExportConfig::default();
    config.sheet.width = 0.0;
    let err = export_plan(&WingSpec::default(), &config).unwrap_err();
    assert!(err.to_string().contains("invalid export config"));
}

#[test]
fn test_plan_export() {
    let svg = export_plan(&WingSpec::default(), &ExportConfig::default()).unwrap();
    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains("spar 1:"));
}
