//! Cross-module tests for core_kernel

use core_kernel::{format_pounds, parse_amount, round_pence, ExternalId, UserId, YesNo};
use rust_decimal_macros::dec;

#[test]
fn test_parsed_amount_survives_rounding_and_formatting() {
    let amount = parse_amount("£1,234.567").unwrap();
    assert_eq!(round_pence(amount), dec!(1234.57));
    assert_eq!(format_pounds(amount), "£1234.57");
}

#[test]
fn test_external_id_json_matches_uri_segment() {
    let id = ExternalId::new();
    let json = serde_json::to_value(id).unwrap();
    assert_eq!(json.as_str().unwrap(), id.to_string());
}

#[test]
fn test_user_id_is_opaque_string() {
    let id = UserId::new("citizen-42");
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"citizen-42\"");
}

#[test]
fn test_yes_no_matches_form_wire_format() {
    assert_eq!("yes".parse::<YesNo>().unwrap(), YesNo::Yes);
    assert_eq!(serde_json::to_string(&YesNo::No).unwrap(), "\"no\"");
}
