//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every inbound HTTP path together with the DTOs and
//! the domain error mirrors from [`crate::inbound::http::schemas`], plus the
//! session cookie security scheme. Swagger UI serves it in debug builds and
//! `openapi-dump` prints it for external tooling.

use crate::inbound::http::accommodations_dto::{
    AccommodationBody, AccommodationDetailResponse, AccommodationListResponse,
    AccommodationResponse, CreatedResponse, MessageResponse, SearchByPeriodResponse, TripParams,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::LoginRequest;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Lodging backend API",
        description = "Accommodation listings with session-authenticated writes and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::users::login,
        crate::inbound::http::accommodations::list_accommodations,
        crate::inbound::http::accommodations::search_by_period,
        crate::inbound::http::accommodations::get_accommodation,
        crate::inbound::http::accommodations::create_accommodation,
        crate::inbound::http::accommodations::update_accommodation,
        crate::inbound::http::accommodations::delete_accommodation,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        LoginRequest,
        AccommodationBody,
        AccommodationResponse,
        AccommodationListResponse,
        SearchByPeriodResponse,
        AccommodationDetailResponse,
        CreatedResponse,
        MessageResponse,
        TripParams,
    )),
    tags(
        (name = "users", description = "Session login"),
        (name = "accommodations", description = "Accommodation listings"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn error_schema_uses_wire_field_names() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get("Error").expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "errorMessage");
        assert_object_schema_has_field(error_schema, "traceId");
    }

    #[test]
    fn accommodation_schema_keeps_description_names() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas
            .get("AccommodationResponse")
            .expect("AccommodationResponse schema");

        for field in ["accId", "accName", "desc1_hanmadi", "desc4_basics", "charge"] {
            assert_object_schema_has_field(schema, field);
        }
    }

    #[rstest]
    #[case("/api/login")]
    #[case("/api/accommodations")]
    #[case("/api/accommodations/searchByPeriod")]
    #[case("/api/accommodations/{accId}")]
    #[case("/health/ready")]
    fn registers_path(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[test]
    fn document_serialises_to_json() {
        let json = ApiDoc::openapi().to_json().expect("serialise OpenAPI");
        assert!(json.contains("SessionCookie"));
    }
}
