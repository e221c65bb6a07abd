use super::*;
use crate::net::types::{Fee, VisaCategory};

fn listing() -> VisaListing {
    serde_json::from_value(serde_json::json!({
        "_id": "v1",
        "country": "Japan",
        "visaType": "Tourist",
        "fee": "40",
        "processingTime": "5 days",
        "countryImageUrl": "https://img/jp.png"
    }))
    .unwrap()
}

#[test]
fn application_snapshots_listing_fields() {
    let app = build_application(&listing(), "a@x.com", " Ada ", "Lovelace", "2026-10-18".to_owned()).unwrap();
    assert_eq!(app.visa_id, "v1");
    assert_eq!(app.country, "Japan");
    assert_eq!(app.visa_type, VisaCategory::Tourist);
    assert_eq!(app.fee, Fee::Amount(40.0));
    assert_eq!(app.first_name, "Ada");
    assert_eq!(app.applied_date, "2026-10-18");
}

#[test]
fn names_are_required() {
    let expected = Err(AppError::Validation("First Name and Last Name are required.".to_owned()));
    assert_eq!(build_application(&listing(), "a@x.com", "", "Lovelace", String::new()), expected);
    assert_eq!(build_application(&listing(), "a@x.com", "Ada", "   ", String::new()), expected);
}

#[test]
fn missing_email_is_rejected() {
    let result = build_application(&listing(), " ", "Ada", "Lovelace", String::new());
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[test]
fn application_serializes_camel_case() {
    let app = build_application(&listing(), "a@x.com", "Ada", "Lovelace", "2026-10-18".to_owned()).unwrap();
    let json = serde_json::to_value(&app).unwrap();
    assert_eq!(json["visaId"], "v1");
    assert_eq!(json["firstName"], "Ada");
    assert_eq!(json["countryImageUrl"], "https://img/jp.png");
}
