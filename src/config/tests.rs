//! Tests for config functionality.

use crate::config::{DecoderConfig, LEGACY_MARKER_KEY};

#[test]
fn test_default_config() {
    let config = DecoderConfig::default();

    assert_eq!(config.legacy_marker, LEGACY_MARKER_KEY);
    assert_eq!(config.legacy_kind, "v1alpha1");
    assert_eq!(config.legacy_version, "");
    assert!(config.skip_empty_documents);
}

#[test]
fn test_parse_minimal_yaml() {
    let config = DecoderConfig::from_yaml("").unwrap();

    assert_eq!(config, DecoderConfig::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
legacy_marker: node
skip_empty_documents: false
"#;
    let config = DecoderConfig::from_yaml(yaml).unwrap();

    assert_eq!(config.legacy_marker, "node");
    assert!(!config.skip_empty_documents);

    // Unspecified values should use defaults
    assert_eq!(config.legacy_kind, "v1alpha1");
}

#[test]
fn test_parse_yaml_with_unknown_fields() {
    let yaml = r#"
legacy_kind: v0
future_feature_x: enabled
"#;
    let config = DecoderConfig::from_yaml(yaml).unwrap();

    assert_eq!(config.legacy_kind, "v0");
}

#[test]
fn test_validate_empty_legacy_marker() {
    let result = DecoderConfig::from_yaml("legacy_marker: ''");

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(err.to_string().contains("legacy_marker"));
    assert!(err.to_string().contains("non-empty"));
}

#[test]
fn test_validate_legacy_marker_cannot_shadow_envelope() {
    for key in ["kind", "version", "spec"] {
        let result = DecoderConfig::from_yaml(&format!("legacy_marker: {}", key));

        let err = result.unwrap_err();
        assert!(err.to_string().contains("collides"), "key {}", key);
    }
}

#[test]
fn test_validate_empty_legacy_kind() {
    let err = DecoderConfig::from_yaml("legacy_kind: ''").unwrap_err();

    assert!(err.to_string().contains("legacy_kind"));
}

#[test]
fn test_parse_invalid_yaml() {
    let err = DecoderConfig::from_yaml("legacy_marker: [unclosed").unwrap_err();

    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_to_yaml() {
    let config = DecoderConfig::default();
    let yaml = config.to_yaml().unwrap();

    let parsed = DecoderConfig::from_yaml(&yaml).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_config_load_from_file() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "legacy_marker: node").unwrap();
    writeln!(file, "legacy_kind: v0").unwrap();

    let config = DecoderConfig::load(file.path()).unwrap();
    assert_eq!(config.legacy_marker, "node");
    assert_eq!(config.legacy_kind, "v0");
}

#[test]
fn test_config_load_missing_file() {
    let result = DecoderConfig::load("/nonexistent/path/mfdecode.yaml");

    let err = result.unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}
