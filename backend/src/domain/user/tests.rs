//! Tests for the user identifier.

use super::*;
use rstest::rstest;

const VALID_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[rstest]
#[case("", UserIdValidationError::Empty)]
#[case("not-a-uuid", UserIdValidationError::Invalid)]
#[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6", UserIdValidationError::Invalid)]
fn rejects_malformed_ids(#[case] raw: &str, #[case] expected: UserIdValidationError) {
    assert_eq!(UserId::new(raw).expect_err("must fail"), expected);
}

#[test]
fn equal_ids_from_string_and_uuid_compare_equal() {
    let parsed = UserId::new(VALID_ID).expect("valid id");
    let stored = UserId::from_uuid(*parsed.as_uuid());
    assert_eq!(parsed, stored);
}

#[test]
fn uppercase_input_normalises_to_lowercase() {
    let id = UserId::new(VALID_ID.to_uppercase()).expect("valid id");
    assert_eq!(id.to_string(), VALID_ID);
}

#[test]
fn serde_uses_string_form() {
    let id = UserId::new(VALID_ID).expect("valid id");
    let json = serde_json::to_string(&id).expect("serialise");
    assert_eq!(json, format!("\"{VALID_ID}\""));

    let back: UserId = serde_json::from_str(&json).expect("deserialise");
    assert_eq!(back, id);
}

#[test]
fn serde_rejects_invalid_string() {
    let result: Result<UserId, _> = serde_json::from_str("\"nope\"");
    assert!(result.is_err());
}
