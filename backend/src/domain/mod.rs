//! Domain primitives, aggregates, and services.
//!
//! Purpose: define the strongly typed accommodation model and the service
//! that enforces its rules. Nothing here knows about HTTP or SQL; adapters
//! reach the domain through [`ports`].
//!
//! Public surface:
//! - [`Accommodation`], [`AccommodationDraft`], [`AccId`]: the listing model.
//! - [`AccommodationService`]: implements the accommodation driving ports.
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failure payload.
//! - [`UserId`], [`LoginCredentials`]: caller identity.
//! - [`TraceId`]: per-request correlation id.

pub mod accommodation;
pub mod accommodation_service;
pub mod auth;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::accommodation::{
    ACCOMMODATION_COUNTER, AccId, AccIdValidationError, Accommodation, AccommodationDetails,
    AccommodationDraft, AccommodationValidationError, AvailabilityWindow, Descriptions,
    REQUIRED_FIELDS, TripWindow, is_truthy,
};
pub use self::accommodation_service::{
    AccommodationService, MISSING_FIELDS_MESSAGE, NOT_FOUND_MESSAGE, NOT_OWNER_DELETE_MESSAGE,
    NOT_OWNER_UPDATE_MESSAGE,
};
pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::error::{Error, ErrorCode};
pub use self::trace_id::TraceId;
pub use self::user::{UserId, UserIdValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use lodging_backend::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<u32> {
///     Err(Error::not_found("nope"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
