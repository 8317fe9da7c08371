use super::*;

#[test]
fn validate_login_input_trims_username_only() {
    assert_eq!(
        validate_login_input("  alice  ", " pa ss "),
        Ok(("alice".to_owned(), " pa ss ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err(MISSING_FIELDS_MESSAGE));
    assert_eq!(validate_login_input("alice", ""), Err(MISSING_FIELDS_MESSAGE));
}

#[test]
fn login_error_message_prefers_server_text() {
    let err = ApiError::Status {
        status: 401,
        message: Some("Incorrect username or password".to_owned()),
    };
    assert_eq!(login_error_message(&err), "Incorrect username or password");
}

#[test]
fn login_error_message_falls_back_without_server_text() {
    assert_eq!(login_error_message(&ApiError::Status { status: 500, message: None }), "Login failed");
    assert_eq!(login_error_message(&ApiError::Network("offline".to_owned())), "Login failed");
    assert_eq!(login_error_message(&ApiError::Decode("eof".to_owned())), "Login failed");
}
