use super::*;

#[test]
fn server_error_prefers_json_message() {
    let err = server_error(409, r#"{"message":"Visa already exists"}"#);
    assert_eq!(
        err,
        AppError::Server { status: 409, message: "Visa already exists".to_owned() }
    );
}

#[test]
fn server_error_falls_back_to_body_text() {
    let err = server_error(500, "  upstream exploded \n");
    assert_eq!(
        err,
        AppError::Server { status: 500, message: "upstream exploded".to_owned() }
    );
}

#[test]
fn server_error_empty_body_uses_status() {
    let err = server_error(404, "");
    assert_eq!(
        err,
        AppError::Server { status: 404, message: "request failed with status 404".to_owned() }
    );
}

#[test]
fn user_message_shows_server_message() {
    let err = AppError::Server { status: 400, message: "Missing fee".to_owned() };
    assert_eq!(err.user_message("Failed to submit application."), "Missing fee");
}

#[test]
fn user_message_uses_fallback_for_network() {
    let err = AppError::Network("connection refused".to_owned());
    assert_eq!(err.user_message("Failed to fetch visa details."), "Failed to fetch visa details.");
}

#[test]
fn user_message_validation_is_verbatim() {
    let err = AppError::validation("First Name and Last Name are required.");
    assert_eq!(err.user_message("ignored"), "First Name and Last Name are required.");
}

#[test]
fn error_codes_are_distinct() {
    let codes = [
        AppError::Network(String::new()).error_code(),
        AppError::Server { status: 500, message: String::new() }.error_code(),
        AppError::Validation(String::new()).error_code(),
        AppError::UserCancelled.error_code(),
        AppError::InvalidCredentials.error_code(),
    ];
    for (i, a) in codes.iter().enumerate() {
        for b in &codes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
