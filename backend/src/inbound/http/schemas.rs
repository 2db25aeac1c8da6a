//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`; these mirrors carry the wire shape
//! for documentation only.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// Malformed request or missing fields.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Caller does not own the listing.
    #[schema(rename = "not_owner")]
    NotOwner,
    /// No session.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// Listing does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// Backing store unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// Unexpected server failure.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error, rename_all = "camelCase")]
#[expect(dead_code, reason = "used only for OpenAPI schema generation")]
pub struct ErrorSchema {
    /// Stable machine-readable code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Message shown to users.
    #[schema(rename = "errorMessage", example = "작성란을 모두 입력해주세요.")]
    message: String,
    /// Correlation id, also sent as the `trace-id` header.
    #[schema(example = "6f1c0a52-3a43-4c8e-9a55-2d1b6f0e9d11")]
    trace_id: Option<String>,
    /// Extra context, such as `missingFields`.
    details: Option<serde_json::Value>,
}
