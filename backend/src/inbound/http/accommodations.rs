//! Accommodation endpoints, mounted under `/api/accommodations`.
//!
//! ```text
//! GET    /api/accommodations
//! GET    /api/accommodations/searchByPeriod {"tripStart":"2024-03-10","tripEnd":"2024-03-12"}
//! GET    /api/accommodations/{accId}
//! POST   /api/accommodations          (session)
//! PUT    /api/accommodations/{accId}  (session)
//! DELETE /api/accommodations/{accId}  (session)
//! ```
//!
//! `searchByPeriod` is registered before `{accId}` so the literal segment
//! wins. Write handlers check the session before reporting an unreadable
//! body, so anonymous callers always see `401`.

use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use serde_json::json;

use crate::domain::ports::{
    CreateAccommodationRequest, DeleteAccommodationRequest, UpdateAccommodationRequest,
};
use crate::domain::{ApiResult, Error};
use crate::inbound::http::accommodations_dto::{
    AccommodationBody, AccommodationDetailResponse, AccommodationListResponse,
    AccommodationResponse, CreatedResponse, MessageResponse, SearchByPeriodResponse, TripParams,
    parse_acc_id,
};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Confirmation after a create.
pub const CREATED_MESSAGE: &str = "숙소 정보를 등록했습니다.";
/// Confirmation after an update.
pub const UPDATED_MESSAGE: &str = "숙소 정보를 수정했습니다.";
/// Confirmation after a delete.
pub const DELETED_MESSAGE: &str = "숙소 정보를 삭제했습니다.";

type BodyResult = Result<web::Json<AccommodationBody>, actix_web::Error>;

/// Unwrap a deferred body extraction, keeping the `invalid_request` built by
/// the `JsonConfig` error handler when there is one.
fn accepted_body(payload: BodyResult) -> Result<AccommodationBody, Error> {
    payload.map(web::Json::into_inner).map_err(|err| {
        err.as_error::<Error>()
            .cloned()
            .unwrap_or_else(|| Error::invalid_request(err.to_string()))
    })
}

/// Register the accommodation routes on a scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/accommodations")
            .service(list_accommodations)
            .service(create_accommodation)
            .service(search_by_period)
            .service(get_accommodation)
            .service(update_accommodation)
            .service(delete_accommodation),
    );
}

fn to_responses(
    items: Vec<crate::domain::Accommodation>,
) -> Vec<AccommodationResponse> {
    items.into_iter().map(AccommodationResponse::from).collect()
}

/// List every accommodation.
#[utoipa::path(
    get,
    path = "/api/accommodations",
    responses(
        (status = 200, description = "All listings", body = AccommodationListResponse),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["accommodations"],
    operation_id = "listAccommodations",
    security([])
)]
#[get("")]
pub async fn list_accommodations(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<AccommodationListResponse>> {
    let items = state.accommodations_query.list().await?;
    Ok(web::Json(AccommodationListResponse {
        accommodations: to_responses(items),
    }))
}

/// Listings open for the whole requested stay.
///
/// Dates come from the JSON body; fields absent there are taken from the
/// query string.
#[utoipa::path(
    get,
    path = "/api/accommodations/searchByPeriod",
    params(TripParams),
    request_body(content = TripParams, description = "Trip dates; optional when sent as query parameters"),
    responses(
        (status = 200, description = "Matching listings", body = SearchByPeriodResponse),
        (status = 400, description = "Missing or invalid dates", body = ErrorSchema)
    ),
    tags = ["accommodations"],
    operation_id = "searchAccommodationsByPeriod",
    security([])
)]
#[get("/searchByPeriod")]
pub async fn search_by_period(
    state: web::Data<HttpState>,
    req: HttpRequest,
    body: web::Bytes,
) -> ApiResult<web::Json<SearchByPeriodResponse>> {
    let from_body = if body.iter().all(u8::is_ascii_whitespace) {
        TripParams::default()
    } else {
        serde_json::from_slice::<TripParams>(&body)
            .map_err(|err| Error::invalid_request(format!("malformed JSON body: {err}")))?
    };
    let from_query = web::Query::<TripParams>::from_query(req.query_string())
        .map(web::Query::into_inner)
        .map_err(|err| {
            Error::invalid_request("malformed query string")
                .with_details(json!({ "reason": err.to_string() }))
        })?;
    let trip = from_body.or(from_query).into_window()?;

    let items = state.accommodations_query.search_by_period(trip).await?;
    Ok(web::Json(SearchByPeriodResponse {
        target_accommodations: to_responses(items),
    }))
}

/// One accommodation; `null` when absent.
#[utoipa::path(
    get,
    path = "/api/accommodations/{accId}",
    params(("accId" = i64, Path, description = "Listing id")),
    responses(
        (status = 200, description = "Listing or null", body = AccommodationDetailResponse),
        (status = 400, description = "accId is not a positive integer", body = ErrorSchema)
    ),
    tags = ["accommodations"],
    operation_id = "getAccommodation",
    security([])
)]
#[get("/{acc_id}")]
pub async fn get_accommodation(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<AccommodationDetailResponse>> {
    let acc_id = parse_acc_id(&path)?;
    let found = state.accommodations_query.find(acc_id).await?;
    Ok(web::Json(AccommodationDetailResponse {
        accommodation: found.map(AccommodationResponse::from),
    }))
}

/// Register a listing owned by the caller.
#[utoipa::path(
    post,
    path = "/api/accommodations",
    request_body = AccommodationBody,
    responses(
        (status = 200, description = "Created", body = CreatedResponse),
        (status = 400, description = "Missing fields", body = ErrorSchema),
        (status = 401, description = "No session", body = ErrorSchema)
    ),
    tags = ["accommodations"],
    operation_id = "createAccommodation"
)]
#[post("")]
pub async fn create_accommodation(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: BodyResult,
) -> ApiResult<web::Json<CreatedResponse>> {
    let owner = session.require_user_id()?;
    let body = accepted_body(payload)?;
    let response = state
        .accommodations
        .create(CreateAccommodationRequest {
            owner,
            draft: body.into(),
        })
        .await?;
    Ok(web::Json(CreatedResponse {
        message: CREATED_MESSAGE.to_owned(),
        acc_id: response.acc_id.get(),
    }))
}

/// Replace an owned listing.
#[utoipa::path(
    put,
    path = "/api/accommodations/{accId}",
    params(("accId" = i64, Path, description = "Listing id")),
    request_body = AccommodationBody,
    responses(
        (status = 200, description = "Updated", body = MessageResponse),
        (status = 400, description = "Missing fields or not the owner", body = ErrorSchema),
        (status = 401, description = "No session", body = ErrorSchema),
        (status = 404, description = "No such listing", body = ErrorSchema)
    ),
    tags = ["accommodations"],
    operation_id = "updateAccommodation"
)]
#[put("/{acc_id}")]
pub async fn update_accommodation(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: BodyResult,
) -> ApiResult<web::Json<MessageResponse>> {
    let caller = session.require_user_id()?;
    let acc_id = parse_acc_id(&path)?;
    let body = accepted_body(payload)?;
    state
        .accommodations
        .update(UpdateAccommodationRequest {
            acc_id,
            caller,
            draft: body.into(),
        })
        .await?;
    Ok(web::Json(MessageResponse {
        message: UPDATED_MESSAGE.to_owned(),
    }))
}

/// Delete an owned listing.
#[utoipa::path(
    delete,
    path = "/api/accommodations/{accId}",
    params(("accId" = i64, Path, description = "Listing id")),
    responses(
        (status = 200, description = "Deleted", body = MessageResponse),
        (status = 400, description = "Not the owner", body = ErrorSchema),
        (status = 401, description = "No session", body = ErrorSchema),
        (status = 404, description = "No such listing", body = ErrorSchema)
    ),
    tags = ["accommodations"],
    operation_id = "deleteAccommodation"
)]
#[delete("/{acc_id}")]
pub async fn delete_accommodation(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let caller = session.require_user_id()?;
    let acc_id = parse_acc_id(&path)?;
    state
        .accommodations
        .delete(DeleteAccommodationRequest { acc_id, caller })
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: DELETED_MESSAGE.to_owned(),
    }))
}

#[cfg(test)]
#[path = "accommodations_tests.rs"]
mod tests;
