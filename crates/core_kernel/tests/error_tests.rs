//! Tests for core_kernel error types

use core_kernel::error::{parse_count, CoreError};
use core_kernel::money::MoneyError;
use core_kernel::temporal::TemporalError;

#[test]
fn test_core_error_validation() {
    let error = CoreError::validation("Invalid input");

    match error {
        CoreError::Validation(msg) => assert_eq!(msg, "Invalid input"),
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_core_error_from_money_error() {
    let money_error = MoneyError::InvalidAmount("abc".to_string());
    let core_error: CoreError = money_error.into();

    assert!(matches!(core_error, CoreError::Money(_)));
}

#[test]
fn test_core_error_from_temporal_error() {
    let temporal_error = TemporalError::MalformedRange("soon".to_string());
    let core_error: CoreError = temporal_error.into();

    assert!(matches!(core_error, CoreError::Temporal(_)));
}

#[test]
fn test_core_error_display() {
    let error = CoreError::validation("Test error");
    let display = format!("{}", error);

    assert!(display.contains("Validation error"));
}

#[test]
fn test_parse_count() {
    assert_eq!(parse_count("4"), Ok(4));
    assert_eq!(parse_count(" 0 "), Ok(0));
    assert_eq!(parse_count("-2"), Ok(-2));
}

#[test]
fn test_parse_count_rejects_non_integers() {
    assert!(matches!(parse_count("two"), Err(CoreError::Validation(_))));
    assert!(parse_count("1.5").is_err());
    assert!(parse_count("").is_err());
}
