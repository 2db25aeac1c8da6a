//! Tests for the accommodation aggregate and draft validation.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).expect("valid date")
}

#[fixture]
fn complete_draft() -> AccommodationDraft {
    AccommodationDraft {
        photos: Some(vec!["https://bucket.s3.amazonaws.com/a.jpg".to_owned()]),
        name: Some("Seaside cabin".to_owned()),
        open_at: Some(date(1, 1)),
        close_at: Some(date(1, 31)),
        address: Some("1 Beach Road".to_owned()),
        hanmadi: Some("Waves at the door".to_owned()),
        surroundings: Some("Harbour, market".to_owned()),
        notice: Some("No parties".to_owned()),
        basics: Some("2 rooms".to_owned()),
        facilities: Some(json!(["wifi", "parking"])),
        charge: Some(json!(80_000)),
    }
}

#[rstest]
fn complete_draft_validates(complete_draft: AccommodationDraft) {
    let details = complete_draft.validate().expect("valid draft");
    assert_eq!(details.name, "Seaside cabin");
    assert_eq!(details.window.open_at(), date(1, 1));
    assert_eq!(details.descriptions.notice, "No parties");
    assert_eq!(details.charge, json!(80_000));
}

#[rstest]
fn structured_charge_is_kept_verbatim(complete_draft: AccommodationDraft) {
    let pricing = json!({ "weekday": 90_000, "weekend": 120_000 });
    let mut draft = complete_draft;
    draft.charge = Some(pricing.clone());
    assert_eq!(draft.validate().expect("valid draft").charge, pricing);
}

#[rstest]
#[case::photos(|d: &mut AccommodationDraft| d.photos = None, "photos")]
#[case::name(|d: &mut AccommodationDraft| d.name = Some(String::new()), "accName")]
#[case::open_at(|d: &mut AccommodationDraft| d.open_at = None, "openAt")]
#[case::close_at(|d: &mut AccommodationDraft| d.close_at = None, "closeAt")]
#[case::address(|d: &mut AccommodationDraft| d.address = None, "address")]
#[case::hanmadi(|d: &mut AccommodationDraft| d.hanmadi = Some(String::new()), "desc1_hanmadi")]
#[case::surroundings(|d: &mut AccommodationDraft| d.surroundings = None, "desc2_surroundings")]
#[case::notice(|d: &mut AccommodationDraft| d.notice = None, "desc3_notice")]
#[case::basics(|d: &mut AccommodationDraft| d.basics = None, "desc4_basics")]
#[case::facilities_null(|d: &mut AccommodationDraft| d.facilities = Some(Value::Null), "facilities")]
#[case::facilities_empty(|d: &mut AccommodationDraft| d.facilities = Some(json!("")), "facilities")]
#[case::charge_zero(|d: &mut AccommodationDraft| d.charge = Some(json!(0)), "charge")]
#[case::charge_empty(|d: &mut AccommodationDraft| d.charge = Some(json!("")), "charge")]
#[case::charge_absent(|d: &mut AccommodationDraft| d.charge = None, "charge")]
fn single_missing_field_is_reported(
    complete_draft: AccommodationDraft,
    #[case] strip: fn(&mut AccommodationDraft),
    #[case] field: &'static str,
) {
    let mut draft = complete_draft;
    strip(&mut draft);

    let err = draft.validate().expect_err("must be rejected");
    assert_eq!(err, AccommodationValidationError::MissingFields(vec![field]));
}

#[test]
fn empty_draft_reports_every_field_in_form_order() {
    let err = AccommodationDraft::default()
        .validate()
        .expect_err("empty draft");
    assert_eq!(
        err,
        AccommodationValidationError::MissingFields(REQUIRED_FIELDS.to_vec())
    );
}

#[rstest]
fn empty_photo_list_is_accepted(complete_draft: AccommodationDraft) {
    let mut draft = complete_draft;
    draft.photos = Some(Vec::new());
    assert!(draft.validate().expect("valid").photos.is_empty());
}

#[rstest]
fn inverted_window_is_rejected(complete_draft: AccommodationDraft) {
    let mut draft = complete_draft;
    draft.open_at = Some(date(2, 1));
    draft.close_at = Some(date(1, 1));

    let err = draft.validate().expect_err("inverted");
    assert!(matches!(err, AccommodationValidationError::InvertedWindow { .. }));
}

#[rstest]
#[case(json!(null), false)]
#[case(json!(false), false)]
#[case(json!(0), false)]
#[case(json!(0.0), false)]
#[case(json!(""), false)]
#[case(json!(true), true)]
#[case(json!(-1), true)]
#[case(json!("pool"), true)]
#[case(json!([]), true)]
#[case(json!({}), true)]
fn truthiness_matches_form_rules(#[case] value: Value, #[case] expected: bool) {
    assert_eq!(is_truthy(&value), expected);
}

#[rstest]
#[case("1", Ok(1))]
#[case("9007199254740993", Ok(9_007_199_254_740_993))]
#[case("0", Err(AccIdValidationError::NotPositive))]
#[case("-4", Err(AccIdValidationError::NotPositive))]
#[case("4.5", Err(AccIdValidationError::NotNumeric))]
#[case("searchByPeriod", Err(AccIdValidationError::NotNumeric))]
fn acc_id_parsing(#[case] raw: &str, #[case] expected: Result<i64, AccIdValidationError>) {
    assert_eq!(raw.parse::<AccId>().map(AccId::get), expected);
}

#[rstest]
#[case(date(1, 10), date(1, 20), true)]
#[case(date(1, 1), date(1, 31), true)]
#[case(date(2, 1), date(2, 5), false)]
#[case(date(1, 10), date(2, 1), false)]
#[case(date(1, 20), date(1, 10), true)]
fn availability_covers_contained_trips(
    #[case] trip_start: NaiveDate,
    #[case] trip_end: NaiveDate,
    #[case] expected: bool,
) {
    let window = AvailabilityWindow::new(date(1, 1), date(1, 31)).expect("window");
    let trip = TripWindow {
        trip_start,
        trip_end,
    };
    assert_eq!(window.covers(&trip), expected);
}

#[rstest]
fn replacement_keeps_identity_and_reports_dropped_photos(complete_draft: AccommodationDraft) {
    let owner = UserId::random();
    let mut details = complete_draft.validate().expect("valid");
    details.photos = vec!["a".to_owned(), "b".to_owned(), "c".to_owned()];
    let original = Accommodation::new(AccId::new(7).expect("id"), owner, details.clone());

    let mut next = details;
    next.photos = vec!["c".to_owned(), "d".to_owned()];
    next.name = "Renamed".to_owned();

    assert_eq!(original.photos_dropped_by(&next), vec!["a", "b"]);
    let replaced = original.replaced_with(next);
    assert_eq!(replaced.acc_id(), original.acc_id());
    assert!(replaced.is_owned_by(&owner));
    assert!(!replaced.is_owned_by(&UserId::random()));
    assert_eq!(replaced.details().name, "Renamed");
}
