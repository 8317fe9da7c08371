use super::*;

#[test]
fn status_display_matches_http_client_wording() {
    let err = ApiError::Status { status: 401, message: None };
    assert_eq!(err.to_string(), "Request failed with status code 401");
}

#[test]
fn missing_token_display() {
    assert_eq!(ApiError::MissingToken.to_string(), "No access token provided");
}

#[test]
fn network_display_is_passthrough() {
    assert_eq!(ApiError::Network("Network Error".to_owned()).to_string(), "Network Error");
}

#[test]
fn server_message_only_for_status_errors() {
    let err = ApiError::Status { status: 400, message: Some("Username taken".to_owned()) };
    assert_eq!(err.server_message(), Some("Username taken"));
    assert_eq!(ApiError::Decode("eof".to_owned()).server_message(), None);
    assert_eq!(ApiError::Unavailable.server_message(), None);
}
