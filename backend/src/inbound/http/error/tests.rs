//! Tests for HTTP error mapping.

use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_owner("등록자만 수정할 수 있습니다."), StatusCode::BAD_REQUEST)]
#[case(Error::unauthorized("login required"), StatusCode::UNAUTHORIZED)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::service_unavailable("db down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] err: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&err), status);
}

async fn body_of(error: &Error) -> (StatusCode, Option<String>, Value) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("ascii header").to_owned());
    let bytes = to_bytes(response.into_body()).await.expect("body");
    let json = serde_json::from_slice(&bytes).expect("json body");
    (status, header, json)
}

#[actix_web::test]
async fn internal_errors_are_redacted() {
    let error = Error::internal("db password leaked")
        .with_trace_id(TRACE_ID)
        .with_details(json!({"secret": "x"}));
    let (status, header, body) = body_of(&error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(
        body,
        json!({"code": "internal_error", "errorMessage": REDACTED_MESSAGE, "traceId": TRACE_ID})
    );
}

#[actix_web::test]
async fn client_errors_keep_message_and_details() {
    let error = Error::invalid_request("작성란을 모두 입력해주세요.")
        .with_details(json!({"missingFields": ["charge"]}));
    let (status, header, body) = body_of(&error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(header.is_none());
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["errorMessage"], "작성란을 모두 입력해주세요.");
    assert_eq!(body["details"]["missingFields"][0], "charge");
}

#[actix_web::test]
async fn not_owner_uses_its_own_code() {
    let (_, _, body) = body_of(&Error::not_owner("등록자만 삭제할 수 있습니다.")).await;
    assert_eq!(body["code"], "not_owner");
}

#[actix_web::test]
async fn json_errors_become_invalid_requests() {
    let req = actix_web::test::TestRequest::default().to_http_request();
    let err = json_error_handler(JsonPayloadError::ContentType, &req);
    let response = err.error_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body()).await.expect("body");
    let body: Value = serde_json::from_slice(&bytes).expect("json");
    assert_eq!(body["code"], "invalid_request");
}
