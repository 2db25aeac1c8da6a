//! Tests for the domain error payload.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(Error::invalid_request("x"), ErrorCode::InvalidRequest)]
#[case(Error::not_owner("x"), ErrorCode::NotOwner)]
#[case(Error::unauthorized("x"), ErrorCode::Unauthorized)]
#[case(Error::not_found("x"), ErrorCode::NotFound)]
#[case(Error::service_unavailable("x"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("x"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[test]
fn serialises_message_as_error_message() {
    let err = Error::invalid_request("작성란을 모두 입력해주세요.");
    let value = serde_json::to_value(&err).expect("serialise error");

    assert_eq!(
        value,
        json!({ "code": "invalid_request", "errorMessage": "작성란을 모두 입력해주세요." })
    );
}

#[test]
fn serialises_trace_id_and_details_when_present() {
    let err = Error::not_owner("등록자만 삭제할 수 있습니다.")
        .with_trace_id("abc")
        .with_details(json!({ "accId": 4 }));
    let value = serde_json::to_value(&err).expect("serialise error");

    assert_eq!(value["code"], "not_owner");
    assert_eq!(value["traceId"], "abc");
    assert_eq!(value["details"]["accId"], 4);
}

#[tokio::test]
async fn captures_trace_id_in_scope() {
    let trace_id = TraceId::generate();
    let err = TraceId::scope(trace_id, async { Error::internal("boom") }).await;

    assert_eq!(err.trace_id(), Some(trace_id.to_string().as_str()));
}

#[test]
fn display_uses_message() {
    assert_eq!(Error::not_found("gone").to_string(), "gone");
}
