//! Accommodation request and response bodies.
//!
//! Field names follow the listing form (`accName`, `desc1_hanmadi`, ...).
//! Form fields are read leniently: any falsy JSON value (`null`, `false`,
//! `0`, `""`) counts as a missing field rather than a malformed body.

use chrono::{DateTime, NaiveDate};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Value, json};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    AccId, Accommodation, AccommodationDraft, Error, MISSING_FIELDS_MESSAGE, TripWindow,
    is_truthy,
};

/// Parse `YYYY-MM-DD`, or an RFC 3339 timestamp truncated to its date.
///
/// ```
/// use lodging_backend::inbound::http::accommodations_dto::parse_date;
///
/// assert!(parse_date("2024-03-01").is_some());
/// assert_eq!(parse_date("2024-03-01T09:00:00Z"), parse_date("2024-03-01"));
/// assert!(parse_date("March").is_none());
/// ```
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Falsy values read as `None`; truthy values must still match `T`.
fn falsy_as_missing<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(value) if is_truthy(&value) => serde_json::from_value(value)
            .map(Some)
            .map_err(D::Error::custom),
        _ => Ok(None),
    }
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(text) = falsy_as_missing::<D, String>(deserializer)? else {
        return Ok(None);
    };
    parse_date(&text)
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("invalid date `{text}`")))
}

/// Listing form body for create and update. Every field is optional so that
/// all missing fields are reported together.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccommodationBody {
    /// Photo URLs in display order.
    #[serde(default, deserialize_with = "falsy_as_missing")]
    pub photos: Option<Vec<String>>,
    /// Listing title.
    #[serde(default, deserialize_with = "falsy_as_missing")]
    pub acc_name: Option<String>,
    /// First bookable date.
    #[serde(default, deserialize_with = "lenient_date")]
    #[schema(value_type = Option<String>, example = "2024-01-01")]
    pub open_at: Option<NaiveDate>,
    /// Last bookable date.
    #[serde(default, deserialize_with = "lenient_date")]
    #[schema(value_type = Option<String>, example = "2024-12-31")]
    pub close_at: Option<NaiveDate>,
    /// Street address.
    #[serde(default, deserialize_with = "falsy_as_missing")]
    pub address: Option<String>,
    /// One-line pitch.
    #[serde(rename = "desc1_hanmadi", default, deserialize_with = "falsy_as_missing")]
    pub desc1_hanmadi: Option<String>,
    /// Neighbourhood.
    #[serde(rename = "desc2_surroundings", default, deserialize_with = "falsy_as_missing")]
    pub desc2_surroundings: Option<String>,
    /// Notices.
    #[serde(rename = "desc3_notice", default, deserialize_with = "falsy_as_missing")]
    pub desc3_notice: Option<String>,
    /// Basics.
    #[serde(rename = "desc4_basics", default, deserialize_with = "falsy_as_missing")]
    pub desc4_basics: Option<String>,
    /// Free-form facilities.
    #[schema(value_type = Option<Object>)]
    pub facilities: Option<Value>,
    /// Pricing: a nightly amount or a structured schedule.
    #[schema(value_type = Option<Object>)]
    pub charge: Option<Value>,
}

impl From<AccommodationBody> for AccommodationDraft {
    fn from(body: AccommodationBody) -> Self {
        Self {
            photos: body.photos,
            name: body.acc_name,
            open_at: body.open_at,
            close_at: body.close_at,
            address: body.address,
            hanmadi: body.desc1_hanmadi,
            surroundings: body.desc2_surroundings,
            notice: body.desc3_notice,
            basics: body.desc4_basics,
            facilities: body.facilities,
            charge: body.charge,
        }
    }
}

/// A listing as returned to clients.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccommodationResponse {
    /// Identifier.
    pub acc_id: i64,
    /// Owner.
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub user_id: String,
    /// Photo URLs.
    pub photos: Vec<String>,
    /// Title.
    pub acc_name: String,
    /// First bookable date.
    #[schema(value_type = String, example = "2024-01-01")]
    pub open_at: NaiveDate,
    /// Last bookable date.
    #[schema(value_type = String, example = "2024-12-31")]
    pub close_at: NaiveDate,
    /// Street address.
    pub address: String,
    /// One-line pitch.
    #[serde(rename = "desc1_hanmadi")]
    pub desc1_hanmadi: String,
    /// Neighbourhood.
    #[serde(rename = "desc2_surroundings")]
    pub desc2_surroundings: String,
    /// Notices.
    #[serde(rename = "desc3_notice")]
    pub desc3_notice: String,
    /// Basics.
    #[serde(rename = "desc4_basics")]
    pub desc4_basics: String,
    /// Free-form facilities.
    #[schema(value_type = Object)]
    pub facilities: Value,
    /// Pricing as submitted.
    #[schema(value_type = Object)]
    pub charge: Value,
}

impl From<Accommodation> for AccommodationResponse {
    fn from(accommodation: Accommodation) -> Self {
        let acc_id = accommodation.acc_id().get();
        let user_id = accommodation.owner().to_string();
        let details = accommodation.details().clone();
        Self {
            acc_id,
            user_id,
            photos: details.photos,
            acc_name: details.name,
            open_at: details.window.open_at(),
            close_at: details.window.close_at(),
            address: details.address,
            desc1_hanmadi: details.descriptions.hanmadi,
            desc2_surroundings: details.descriptions.surroundings,
            desc3_notice: details.descriptions.notice,
            desc4_basics: details.descriptions.basics,
            facilities: details.facilities,
            charge: details.charge,
        }
    }
}

/// `GET /api/accommodations`
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AccommodationListResponse {
    /// Every listing, by id.
    pub accommodations: Vec<AccommodationResponse>,
}

/// `GET /api/accommodations/searchByPeriod`
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchByPeriodResponse {
    /// Listings open for the whole trip.
    pub target_accommodations: Vec<AccommodationResponse>,
}

/// `GET /api/accommodations/{accId}`
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AccommodationDetailResponse {
    /// The listing, or `null` when it does not exist.
    pub accommodation: Option<AccommodationResponse>,
}

/// `POST /api/accommodations`
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedResponse {
    /// Confirmation shown to the user.
    #[schema(example = "숙소 정보를 등록했습니다.")]
    pub message: String,
    /// Identifier of the new listing.
    pub acc_id: i64,
}

/// Confirmation for update and delete.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Confirmation shown to the user.
    pub message: String,
}

/// Trip dates, read from the JSON body or the query string.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TripParams {
    /// First night, `YYYY-MM-DD`.
    #[param(example = "2024-03-10")]
    pub trip_start: Option<String>,
    /// Last day, `YYYY-MM-DD`.
    #[param(example = "2024-03-12")]
    pub trip_end: Option<String>,
}

impl TripParams {
    /// Fill fields missing here from `fallback`.
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        Self {
            trip_start: non_blank(self.trip_start).or(non_blank(fallback.trip_start)),
            trip_end: non_blank(self.trip_end).or(non_blank(fallback.trip_end)),
        }
    }

    /// Validate into a [`TripWindow`].
    ///
    /// # Errors
    ///
    /// `invalid_request` when a date is missing or unparsable.
    pub fn into_window(self) -> Result<TripWindow, Error> {
        let start = non_blank(self.trip_start);
        let end = non_blank(self.trip_end);
        let mut missing = Vec::new();
        if start.is_none() {
            missing.push("tripStart");
        }
        if end.is_none() {
            missing.push("tripEnd");
        }
        let (Some(start), Some(end)) = (start, end) else {
            return Err(Error::invalid_request(MISSING_FIELDS_MESSAGE)
                .with_details(json!({ "missingFields": missing })));
        };
        Ok(TripWindow {
            trip_start: parse_trip_date("tripStart", &start)?,
            trip_end: parse_trip_date("tripEnd", &end)?,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

fn parse_trip_date(field: &str, raw: &str) -> Result<NaiveDate, Error> {
    parse_date(raw).ok_or_else(|| {
        Error::invalid_request(format!("{field} must be a date"))
            .with_details(json!({ "field": field, "value": raw }))
    })
}

/// Parse the `{accId}` path segment.
///
/// # Errors
///
/// `invalid_request` unless the segment is a positive integer.
pub fn parse_acc_id(raw: &str) -> Result<AccId, Error> {
    raw.parse().map_err(|err| {
        Error::invalid_request(format!("invalid accId: {err}"))
            .with_details(json!({ "field": "accId", "value": raw }))
    })
}
