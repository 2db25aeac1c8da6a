//! Accommodation aggregate and its input validation.
//!
//! An [`Accommodation`] pairs an immutable [`AccId`] and owner with the
//! replaceable [`AccommodationDetails`]. Inbound adapters collect raw input in
//! an [`AccommodationDraft`] and call [`AccommodationDraft::validate`]; the
//! rules mirror the listing form, where a field counts as missing when it is
//! absent, an empty string, or a falsy JSON `facilities` or `charge` value.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde_json::Value;

use super::UserId;

/// Counter name used to mint accommodation identifiers.
pub const ACCOMMODATION_COUNTER: &str = "Accommodation";

/// Wire names of the fields every listing must carry, in form order.
pub const REQUIRED_FIELDS: [&str; 11] = [
    "photos",
    "accName",
    "openAt",
    "closeAt",
    "address",
    "desc1_hanmadi",
    "desc2_surroundings",
    "desc3_notice",
    "desc4_basics",
    "facilities",
    "charge",
];

/// Errors raised when parsing an [`AccId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccIdValidationError {
    /// Input was not a base-10 integer.
    NotNumeric,
    /// Identifiers start at 1.
    NotPositive,
}

impl fmt::Display for AccIdValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotNumeric => f.write_str("accId must be an integer"),
            Self::NotPositive => f.write_str("accId must be positive"),
        }
    }
}

impl std::error::Error for AccIdValidationError {}

/// Sequential accommodation identifier.
///
/// # Examples
/// ```
/// use lodging_backend::domain::AccId;
///
/// let id: AccId = "42".parse().unwrap();
/// assert_eq!(id.get(), 42);
/// assert!("0".parse::<AccId>().is_err());
/// assert!("searchByPeriod".parse::<AccId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccId(i64);

impl AccId {
    /// Wrap a raw value, rejecting zero and negatives.
    pub const fn new(raw: i64) -> Result<Self, AccIdValidationError> {
        if raw < 1 {
            return Err(AccIdValidationError::NotPositive);
        }
        Ok(Self(raw))
    }

    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl FromStr for AccId {
    type Err = AccIdValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: i64 = s.parse().map_err(|_| AccIdValidationError::NotNumeric)?;
        Self::new(raw)
    }
}

impl fmt::Display for AccId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Requested stay, `[trip_start, trip_end]`. Not validated for ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripWindow {
    /// First night of the stay.
    pub trip_start: NaiveDate,
    /// Last day of the stay.
    pub trip_end: NaiveDate,
}

/// Period during which a listing may be booked.
///
/// ## Invariants
/// - `open_at <= close_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityWindow {
    open_at: NaiveDate,
    close_at: NaiveDate,
}

impl AvailabilityWindow {
    /// Build a window, rejecting an inverted range.
    pub fn new(open_at: NaiveDate, close_at: NaiveDate) -> Result<Self, AccommodationValidationError> {
        if open_at > close_at {
            return Err(AccommodationValidationError::InvertedWindow { open_at, close_at });
        }
        Ok(Self { open_at, close_at })
    }

    /// Opening date.
    #[must_use]
    pub const fn open_at(&self) -> NaiveDate {
        self.open_at
    }

    /// Closing date.
    #[must_use]
    pub const fn close_at(&self) -> NaiveDate {
        self.close_at
    }

    /// True when the whole trip falls inside this window.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use lodging_backend::domain::{AvailabilityWindow, TripWindow};
    ///
    /// let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
    /// let window = AvailabilityWindow::new(d(1), d(31)).unwrap();
    /// assert!(window.covers(&TripWindow { trip_start: d(10), trip_end: d(20) }));
    /// assert!(!window.covers(&TripWindow { trip_start: d(10), trip_end: d(31).succ_opt().unwrap() }));
    /// ```
    #[must_use]
    pub fn covers(&self, trip: &TripWindow) -> bool {
        self.open_at <= trip.trip_start && self.close_at >= trip.trip_end
    }
}

/// The four free-text description blocks of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptions {
    /// One-line pitch (`desc1_hanmadi`).
    pub hanmadi: String,
    /// Neighbourhood (`desc2_surroundings`).
    pub surroundings: String,
    /// House rules and notices (`desc3_notice`).
    pub notice: String,
    /// Basic information (`desc4_basics`).
    pub basics: String,
}

/// Replaceable content of a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct AccommodationDetails {
    /// Photo URLs in display order.
    pub photos: Vec<String>,
    /// Listing title (`accName`).
    pub name: String,
    /// Availability window.
    pub window: AvailabilityWindow,
    /// Street address.
    pub address: String,
    /// Description blocks.
    pub descriptions: Descriptions,
    /// Facilities, free-form JSON.
    pub facilities: Value,
    /// Pricing: a plain nightly amount or a structured JSON schedule.
    pub charge: Value,
}

/// Validation failures for listing input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccommodationValidationError {
    /// One or more required fields were missing or falsy.
    MissingFields(Vec<&'static str>),
    /// `openAt` falls after `closeAt`.
    InvertedWindow {
        /// Supplied opening date.
        open_at: NaiveDate,
        /// Supplied closing date.
        close_at: NaiveDate,
    },
}

impl fmt::Display for AccommodationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields(fields) => write!(f, "missing fields: {}", fields.join(", ")),
            Self::InvertedWindow { open_at, close_at } => {
                write!(f, "openAt {open_at} is after closeAt {close_at}")
            }
        }
    }
}

impl std::error::Error for AccommodationValidationError {}

/// Raw listing input before validation. Every field is optional so that all
/// missing fields can be reported at once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccommodationDraft {
    /// `photos`
    pub photos: Option<Vec<String>>,
    /// `accName`
    pub name: Option<String>,
    /// `openAt`
    pub open_at: Option<NaiveDate>,
    /// `closeAt`
    pub close_at: Option<NaiveDate>,
    /// `address`
    pub address: Option<String>,
    /// `desc1_hanmadi`
    pub hanmadi: Option<String>,
    /// `desc2_surroundings`
    pub surroundings: Option<String>,
    /// `desc3_notice`
    pub notice: Option<String>,
    /// `desc4_basics`
    pub basics: Option<String>,
    /// `facilities`
    pub facilities: Option<Value>,
    /// `charge`
    pub charge: Option<Value>,
}

impl AccommodationDraft {
    /// Check every required field and build validated details.
    pub fn validate(self) -> Result<AccommodationDetails, AccommodationValidationError> {
        let mut missing = Vec::new();

        let photos = self.photos;
        let name = non_empty(self.name);
        let address = non_empty(self.address);
        let hanmadi = non_empty(self.hanmadi);
        let surroundings = non_empty(self.surroundings);
        let notice = non_empty(self.notice);
        let basics = non_empty(self.basics);
        let facilities = self.facilities.filter(is_truthy);
        let charge = self.charge.filter(is_truthy);

        let present = [
            photos.is_some(),
            name.is_some(),
            self.open_at.is_some(),
            self.close_at.is_some(),
            address.is_some(),
            hanmadi.is_some(),
            surroundings.is_some(),
            notice.is_some(),
            basics.is_some(),
            facilities.is_some(),
            charge.is_some(),
        ];
        for (field, ok) in REQUIRED_FIELDS.iter().zip(present) {
            if !ok {
                missing.push(*field);
            }
        }

        let (
            Some(photos),
            Some(name),
            Some(open_at),
            Some(close_at),
            Some(address),
            Some(hanmadi),
            Some(surroundings),
            Some(notice),
            Some(basics),
            Some(facilities),
            Some(charge),
        ) = (
            photos,
            name,
            self.open_at,
            self.close_at,
            address,
            hanmadi,
            surroundings,
            notice,
            basics,
            facilities,
            charge,
        )
        else {
            return Err(AccommodationValidationError::MissingFields(missing));
        };

        Ok(AccommodationDetails {
            photos,
            name,
            window: AvailabilityWindow::new(open_at, close_at)?,
            address,
            descriptions: Descriptions {
                hanmadi,
                surroundings,
                notice,
                basics,
            },
            facilities,
            charge,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Truthiness as the listing form understands it: `null`, `false`, `0`, and
/// `""` are falsy, everything else (including empty arrays and objects) is
/// truthy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A persisted listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Accommodation {
    acc_id: AccId,
    owner: UserId,
    details: AccommodationDetails,
}

impl Accommodation {
    /// Assemble a listing from its parts.
    #[must_use]
    pub const fn new(acc_id: AccId, owner: UserId, details: AccommodationDetails) -> Self {
        Self {
            acc_id,
            owner,
            details,
        }
    }

    /// Identifier.
    #[must_use]
    pub const fn acc_id(&self) -> AccId {
        self.acc_id
    }

    /// Registering user.
    #[must_use]
    pub const fn owner(&self) -> &UserId {
        &self.owner
    }

    /// Listing content.
    #[must_use]
    pub const fn details(&self) -> &AccommodationDetails {
        &self.details
    }

    /// Whether `user` registered this listing.
    #[must_use]
    pub fn is_owned_by(&self, user: &UserId) -> bool {
        self.owner == *user
    }

    /// Whether the listing is open for the whole trip.
    #[must_use]
    pub fn is_available_for(&self, trip: &TripWindow) -> bool {
        self.details.window.covers(trip)
    }

    /// The same listing with its content swapped out; id and owner are kept.
    #[must_use]
    pub fn replaced_with(&self, details: AccommodationDetails) -> Self {
        Self::new(self.acc_id, self.owner, details)
    }

    /// Photos referenced here but not by `next`, in original order.
    #[must_use]
    pub fn photos_dropped_by(&self, next: &AccommodationDetails) -> Vec<String> {
        self.details
            .photos
            .iter()
            .filter(|url| !next.photos.contains(url))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests;
