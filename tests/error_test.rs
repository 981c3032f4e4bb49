//! Tests for error types

use degradation_ledger::Error;

#[test]
fn test_format_error() {
    let error = Error::Format {
        date: "04/12/2025".to_string(),
        value: "14h18".to_string(),
    };
    let error_str = format!("{error}");
    assert!(error_str.contains("Invalid time '14h18'"));
    assert!(error_str.contains("04/12/2025"));
    assert!(error_str.contains("HH:MM"));
}

#[test]
fn test_insufficient_data_error() {
    let error = Error::InsufficientData {
        track: "316".to_string(),
    };
    let error_str = format!("{error}");
    assert!(error_str.contains("Insufficient data"));
    assert!(error_str.contains("'316'"));
}

#[test]
fn test_invalid_config_error() {
    let error = Error::InvalidConfig("duplicate track id '304'".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Invalid experiment data"));
    assert!(error_str.contains("duplicate track id"));
}

#[test]
fn test_io_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error: Error = io_error.into();
    let error_str = format!("{error}");
    assert!(error_str.contains("IO error"));
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: Error = json_error.into();
    assert!(format!("{error}").starts_with("JSON error"));
}

#[test]
fn test_error_debug() {
    let error = Error::InsufficientData {
        track: "304".to_string(),
    };
    let debug_str = format!("{error:?}");
    assert!(debug_str.contains("InsufficientData"));
}
