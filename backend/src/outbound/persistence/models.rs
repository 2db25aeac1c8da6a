//! Internal Diesel row structs. Never exposed to the domain.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::ports::AccommodationRepositoryError;
use crate::domain::{
    AccId, Accommodation, AccommodationDetails, AvailabilityWindow, Descriptions, UserId,
};

use super::schema::accommodations;

/// Row read from `accommodations`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = accommodations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AccommodationRow {
    pub acc_id: i64,
    pub user_id: Uuid,
    pub photos: Vec<String>,
    pub acc_name: String,
    pub open_at: NaiveDate,
    pub close_at: NaiveDate,
    pub address: String,
    pub desc1_hanmadi: String,
    pub desc2_surroundings: String,
    pub desc3_notice: String,
    pub desc4_basics: String,
    pub facilities: Value,
    pub charge: Value,
    #[expect(dead_code, reason = "audit column, not part of the domain model")]
    pub created_at: DateTime<Utc>,
    #[expect(dead_code, reason = "audit column, not part of the domain model")]
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<AccommodationRow> for Accommodation {
    type Error = AccommodationRepositoryError;

    fn try_from(row: AccommodationRow) -> Result<Self, Self::Error> {
        let acc_id = AccId::new(row.acc_id).map_err(|err| {
            AccommodationRepositoryError::query(format!("stored acc_id {}: {err}", row.acc_id))
        })?;
        let window = AvailabilityWindow::new(row.open_at, row.close_at).map_err(|err| {
            AccommodationRepositoryError::query(format!("stored window for {acc_id}: {err}"))
        })?;
        let details = AccommodationDetails {
            photos: row.photos,
            name: row.acc_name,
            window,
            address: row.address,
            descriptions: Descriptions {
                hanmadi: row.desc1_hanmadi,
                surroundings: row.desc2_surroundings,
                notice: row.desc3_notice,
                basics: row.desc4_basics,
            },
            facilities: row.facilities,
            charge: row.charge,
        };
        Ok(Self::new(acc_id, UserId::from_uuid(row.user_id), details))
    }
}

/// Insertable listing.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = accommodations)]
pub(crate) struct NewAccommodationRow<'a> {
    pub acc_id: i64,
    pub user_id: Uuid,
    #[diesel(embed)]
    pub content: AccommodationContent<'a>,
}

/// Replaceable columns, shared by insert and full-replacement update.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = accommodations)]
pub(crate) struct AccommodationContent<'a> {
    pub photos: &'a [String],
    pub acc_name: &'a str,
    pub open_at: NaiveDate,
    pub close_at: NaiveDate,
    pub address: &'a str,
    pub desc1_hanmadi: &'a str,
    pub desc2_surroundings: &'a str,
    pub desc3_notice: &'a str,
    pub desc4_basics: &'a str,
    pub facilities: &'a Value,
    pub charge: &'a Value,
}

impl<'a> From<&'a AccommodationDetails> for AccommodationContent<'a> {
    fn from(details: &'a AccommodationDetails) -> Self {
        Self {
            photos: &details.photos,
            acc_name: &details.name,
            open_at: details.window.open_at(),
            close_at: details.window.close_at(),
            address: &details.address,
            desc1_hanmadi: &details.descriptions.hanmadi,
            desc2_surroundings: &details.descriptions.surroundings,
            desc3_notice: &details.descriptions.notice,
            desc4_basics: &details.descriptions.basics,
            facilities: &details.facilities,
            charge: &details.charge,
        }
    }
}

impl<'a> From<&'a Accommodation> for NewAccommodationRow<'a> {
    fn from(accommodation: &'a Accommodation) -> Self {
        Self {
            acc_id: accommodation.acc_id().get(),
            user_id: *accommodation.owner().as_uuid(),
            content: AccommodationContent::from(accommodation.details()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn row(acc_id: i64, open_at: NaiveDate, close_at: NaiveDate) -> AccommodationRow {
        AccommodationRow {
            acc_id,
            user_id: Uuid::nil(),
            photos: vec!["https://cdn.example.com/a.jpg".to_owned()],
            acc_name: "Cabin".to_owned(),
            open_at,
            close_at,
            address: "Road".to_owned(),
            desc1_hanmadi: "a".to_owned(),
            desc2_surroundings: "b".to_owned(),
            desc3_notice: "c".to_owned(),
            desc4_basics: "d".to_owned(),
            facilities: json!(["wifi"]),
            charge: json!({ "weekday": 1, "weekend": 2 }),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).expect("valid date")
    }

    #[test]
    fn row_converts_to_domain() {
        let acc = Accommodation::try_from(row(4, date(1), date(9))).expect("valid row");
        assert_eq!(acc.acc_id().get(), 4);
        assert_eq!(acc.details().name, "Cabin");
        assert_eq!(acc.details().window.close_at(), date(9));
        assert_eq!(acc.owner().as_uuid(), &Uuid::nil());
    }

    #[test]
    fn corrupt_rows_are_query_errors() {
        assert!(matches!(
            Accommodation::try_from(row(0, date(1), date(9))),
            Err(AccommodationRepositoryError::Query { .. })
        ));
        assert!(matches!(
            Accommodation::try_from(row(2, date(9), date(1))),
            Err(AccommodationRepositoryError::Query { .. })
        ));
    }

    #[test]
    fn insert_row_borrows_domain_fields() {
        let acc = Accommodation::try_from(row(4, date(1), date(9))).expect("valid row");
        let insert = NewAccommodationRow::from(&acc);
        assert_eq!(insert.acc_id, 4);
        assert_eq!(insert.content.photos.len(), 1);
        assert_eq!(insert.content.acc_name, "Cabin");
        assert_eq!(insert.content.charge["weekend"], 2);
    }
}
