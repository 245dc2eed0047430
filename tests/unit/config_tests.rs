// Configuration module tests

use noticescan::config::{LogFormat, ScanConfig};
use noticescan::ConfigError;
use std::io::Write;

#[test]
fn test_can_deserialize_full_yaml_config() {
    let yaml = r#"
copyrights:
  min_year: 1970
  max_year: 2030
emails:
  enabled: false
urls:
  unique: false
  max: 10
header:
  max_lines: 50
license_hints:
  spdx: false
logging:
  level: debug
  format: pretty
"#;
    let config = ScanConfig::from_yaml_with_env(yaml).expect("Failed to parse config");
    assert_eq!(config.copyrights.min_year, 1970);
    assert_eq!(config.copyrights.max_year, 2030);
    assert!(config.copyrights.enabled);
    assert!(!config.emails.enabled);
    assert!(!config.urls.unique);
    assert_eq!(config.urls.max, 10);
    assert_eq!(config.header.max_lines, 50);
    assert!(config.license_hints.enabled);
    assert!(!config.license_hints.spdx);
    assert_eq!(config.logging.format, LogFormat::Pretty);
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_sections_use_defaults() {
    let config = ScanConfig::from_yaml_with_env("header:\n  enabled: false\n").unwrap();
    assert!(!config.header.enabled);
    assert!(config.emails.enabled);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn test_substitutes_environment_variables() {
    std::env::set_var("NOTICESCAN_TEST_MAX_LINES", "42");
    let config =
        ScanConfig::from_yaml_with_env("header:\n  max_lines: ${NOTICESCAN_TEST_MAX_LINES}\n").unwrap();
    assert_eq!(config.header.max_lines, 42);
}

#[test]
fn test_missing_environment_variable_is_an_error() {
    let result = ScanConfig::from_yaml_with_env("logging:\n  level: ${NOTICESCAN_TEST_UNSET_VARIABLE}\n");
    match result {
        Err(ConfigError::MissingEnvVar(name)) => assert_eq!(name, "NOTICESCAN_TEST_UNSET_VARIABLE"),
        other => panic!("expected MissingEnvVar, got {:?}", other),
    }
}

#[test]
fn test_invalid_yaml_is_an_error() {
    let result = ScanConfig::from_yaml_with_env("copyrights: [not, a, map]\n");
    assert!(matches!(result, Err(ConfigError::Yaml(_))));
}

#[test]
fn test_can_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "copyrights:\n  min_year: 1980").unwrap();
    let config = ScanConfig::from_file(file.path()).unwrap();
    assert_eq!(config.copyrights.min_year, 1980);
}

#[test]
fn test_missing_file_is_io_error() {
    let result = ScanConfig::from_file("/nonexistent/noticescan.yaml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_zero_header_lines_rejected() {
    let config = ScanConfig::from_yaml_with_env("header:\n  max_lines: 0\n").unwrap();
    assert!(config.validate().is_err());
}
