use super::*;

fn filled() -> VisaFormState {
    VisaFormState {
        country: "  Japan ".to_owned(),
        image_url: "https://img/jp.png".to_owned(),
        category: "Tourist".to_owned(),
        processing_time: "5 days".to_owned(),
        fee: "$40".to_owned(),
        validity: "90 days".to_owned(),
        description: " Short stay ".to_owned(),
    }
}

fn validation_message(result: Result<NewVisa, AppError>) -> String {
    match result {
        Err(AppError::Validation(message)) => message,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn valid_form_builds_trimmed_new_visa() {
    let visa = filled().to_new_visa("a@x.com").unwrap();
    assert_eq!(visa.country, "Japan");
    assert_eq!(visa.visa_type, VisaCategory::Tourist);
    assert!((visa.fee - 40.0).abs() < f64::EPSILON);
    assert_eq!(visa.description, "Short stay");
    assert_eq!(visa.added_by, "a@x.com");
}

#[test]
fn blank_required_fields_are_rejected_in_order() {
    let mut form = filled();
    form.country = "  ".to_owned();
    assert_eq!(validation_message(form.to_new_visa("a@x.com")), "Country is required.");

    let mut form = filled();
    form.category = String::new();
    assert_eq!(validation_message(form.to_new_visa("a@x.com")), "Visa type is required.");

    let mut form = filled();
    form.processing_time = " ".to_owned();
    assert_eq!(validation_message(form.to_new_visa("a@x.com")), "Processing time is required.");

    let mut form = filled();
    form.fee = String::new();
    assert_eq!(validation_message(form.to_new_visa("a@x.com")), "Fee is required.");
}

#[test]
fn negative_or_non_numeric_fee_is_rejected() {
    for fee in ["-5", "forty", "NaN"] {
        let mut form = filled();
        form.fee = fee.to_owned();
        assert_eq!(
            validation_message(form.to_new_visa("a@x.com")),
            "Fee must be a non-negative number.",
            "{fee}"
        );
    }
}

#[test]
fn optional_fields_may_be_blank() {
    let mut form = filled();
    form.image_url = String::new();
    form.validity = String::new();
    form.description = String::new();
    assert!(form.to_new_visa("a@x.com").is_ok());
}

#[test]
fn update_carries_every_editable_field() {
    let update = filled().to_update().unwrap();
    assert_eq!(update.country.as_deref(), Some("Japan"));
    assert_eq!(update.visa_type, Some(VisaCategory::Tourist));
    assert_eq!(update.fee, Some(40.0));
    assert_eq!(update.validity.as_deref(), Some("90 days"));
}

#[test]
fn from_listing_round_trips_through_update() {
    let listing: VisaListing = serde_json::from_value(serde_json::json!({
        "_id": "v1",
        "country": "Canada",
        "visaType": "Work",
        "fee": 155,
        "processingTime": "3 weeks",
        "description": "Skilled worker",
        "countryImageUrl": ""
    }))
    .unwrap();

    let form = VisaFormState::from_listing(&listing);
    assert_eq!(form.fee, "155");
    assert_eq!(form.category, "Work");

    let update = form.to_update().unwrap();
    assert_eq!(update.country.as_deref(), Some("Canada"));
    assert_eq!(update.validity.as_deref(), Some(""));
}

#[test]
fn set_and_value_address_the_same_field() {
    let mut form = VisaFormState::default();
    form.set(VisaField::ProcessingTime, "10 days".to_owned());
    assert_eq!(form.value(VisaField::ProcessingTime), "10 days");
    assert_eq!(form.processing_time, "10 days");
}

#[test]
fn text_fee_listing_prefills_blank_fee() {
    let listing: VisaListing = serde_json::from_value(serde_json::json!({
        "_id": "v2",
        "country": "Peru",
        "visaType": "Study",
        "fee": "100 USD"
    }))
    .unwrap();

    let form = VisaFormState::from_listing(&listing);
    assert_eq!(form.fee, "");
    assert_eq!(form.to_update(), Err(AppError::validation("Fee is required.")));
}

#[test]
fn category_select_offers_each_known_category() {
    use leptos::tachys::view::RenderHtml;

    let owner = Owner::new();
    let html = owner.with(|| {
        let form = RwSignal::new(VisaFormState::default());
        view! { <VisaFormFields form/> }.to_html()
    });

    for category in VisaCategory::KNOWN {
        let name = category.as_str();
        assert!(html.contains(&format!("value=\"{name}\"")), "{name} missing from {html}");
        assert!(html.contains(&format!(">{name}<")), "{name} label missing from {html}");
    }
}
