use super::*;

#[test]
fn book_decodes_service_payload_ignoring_timestamps() {
    let book: Book = serde_json::from_value(serde_json::json!({
        "id": 7,
        "title": "Dune",
        "author": "Frank Herbert",
        "description": "Spice.",
        "image_path": "https://covers/dune.jpg",
        "inventory_count": 3,
        "created_at": "2024-03-04T10:00:00",
        "modified_at": "2024-03-05T10:00:00"
    }))
    .unwrap();
    assert_eq!(book.id, 7);
    assert_eq!(book.image_path.as_deref(), Some("https://covers/dune.jpg"));
    assert!(book.is_available());
}

#[test]
fn book_image_path_may_be_null() {
    let book: Book = serde_json::from_str(
        r#"{"id":1,"title":"T","author":"A","description":"","image_path":null,"inventory_count":0}"#,
    )
    .unwrap();
    assert_eq!(book.image_path, None);
    assert!(!book.is_available());
}

#[test]
fn negative_inventory_is_accepted_and_unavailable() {
    let book: Book = serde_json::from_str(
        r#"{"id":2,"title":"T","author":"A","inventory_count":-4}"#,
    )
    .unwrap();
    assert_eq!(book.inventory_count, -4);
    assert_eq!(book.description, "");
    assert!(!book.is_available());
}

#[test]
fn session_requires_only_access_token() {
    let session: Session = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
    assert_eq!(session.access_token, "abc");
    assert_eq!(session.refresh_token, None);
    assert_eq!(session.token_type, None);
}

#[test]
fn session_keeps_refresh_token_and_type() {
    let session: Session = serde_json::from_str(
        r#"{"access_token":"a","refresh_token":"r","token_type":"bearer","extra":1}"#,
    )
    .unwrap();
    assert_eq!(session.refresh_token.as_deref(), Some("r"));
    assert_eq!(session.token_type.as_deref(), Some("bearer"));
}

#[test]
fn session_without_access_token_fails() {
    assert!(serde_json::from_str::<Session>(r#"{"token_type":"bearer"}"#).is_err());
}

#[test]
fn profile_accepts_camel_case_created_at() {
    let profile: UserProfile = serde_json::from_str(
        r#"{"name":"Ada","email":"ada@example.com","createdAt":"2024-01-02T00:00:00Z"}"#,
    )
    .unwrap();
    assert_eq!(profile.name, "Ada");
    assert_eq!(profile.created_at, "2024-01-02T00:00:00Z");
}

#[test]
fn profile_accepts_users_service_field_names() {
    let profile: UserProfile = serde_json::from_str(
        r#"{"username":"ada","email":"ada@example.com","created_at":"2024-01-02T00:00:00","user_type":"member"}"#,
    )
    .unwrap();
    assert_eq!(profile.name, "ada");
}

#[test]
fn error_body_prefers_message() {
    let body: ErrorBody =
        serde_json::from_str(r#"{"message":"Bad creds","detail":"ignored"}"#).unwrap();
    assert_eq!(body.into_message().as_deref(), Some("Bad creds"));
}

#[test]
fn error_body_uses_string_detail() {
    let body: ErrorBody =
        serde_json::from_str(r#"{"detail":"Incorrect username or password"}"#).unwrap();
    assert_eq!(body.into_message().as_deref(), Some("Incorrect username or password"));
}

#[test]
fn error_body_ignores_structured_detail() {
    let body: ErrorBody =
        serde_json::from_str(r#"{"detail":[{"loc":["body","username"],"msg":"field required"}]}"#)
            .unwrap();
    assert_eq!(body.into_message(), None);
}

#[test]
fn error_body_ignores_blank_message() {
    let body: ErrorBody = serde_json::from_str(r#"{"message":"  "}"#).unwrap();
    assert_eq!(body.into_message(), None);
}
