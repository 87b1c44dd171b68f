use super::*;
use serde_json::json;

fn alice() -> CurrentUser {
    serde_json::from_value(json!({ "id": "1", "username": "alice", "roles": ["user"] })).unwrap()
}

#[test]
fn current_user_parses_minimal_body() {
    let user = alice();
    assert_eq!(user.id, "1");
    assert_eq!(user.username, "alice");
    assert_eq!(user.email, None);
    assert_eq!(user.roles, vec!["user".to_owned()]);
    assert!(user.profile.is_empty());
}

#[test]
fn current_user_normalizes_numeric_id() {
    let user: CurrentUser = serde_json::from_value(json!({ "id": 42, "username": "bob" })).unwrap();
    assert_eq!(user.id, "42");
    assert!(user.roles.is_empty());
}

#[test]
fn current_user_rejects_non_scalar_id() {
    let parsed = serde_json::from_value::<CurrentUser>(json!({ "id": [1], "username": "bob" }));
    assert!(parsed.is_err());
}

#[test]
fn current_user_keeps_extra_profile_fields() {
    let user: CurrentUser = serde_json::from_value(json!({
        "id": "7",
        "username": "carol",
        "email": "carol@example.test",
        "roles": ["admin"],
        "display_name": "Carol C.",
        "org_id": "org-1"
    }))
    .unwrap();
    assert_eq!(user.display_name(), "Carol C.");
    assert_eq!(user.profile.get("org_id"), Some(&json!("org-1")));
    assert!(user.is_admin());
}

#[test]
fn display_name_falls_back_to_username() {
    assert_eq!(alice().display_name(), "alice");
}

#[test]
fn role_intersection() {
    let user = alice();
    assert!(user.has_any_role::<&str>(&[]));
    assert!(user.has_any_role(&["admin", "user"]));
    assert!(!user.has_any_role(&["admin"]));
}

#[test]
fn signup_request_omits_missing_email() {
    let body = serde_json::to_value(SignupRequest {
        username: "dave".to_owned(),
        password: "pw".to_owned(),
        email: None,
    })
    .unwrap();
    assert_eq!(body, json!({ "username": "dave", "password": "pw" }));
}

#[test]
fn error_body_prefers_error_then_message() {
    assert_eq!(ErrorBody::message_from(r#"{"error":"nope"}"#), Some("nope".to_owned()));
    assert_eq!(ErrorBody::message_from(r#"{"message":" bad input "}"#), Some("bad input".to_owned()));
    assert_eq!(ErrorBody::message_from(r#"{"error":""}"#), None);
    assert_eq!(ErrorBody::message_from("<html>"), None);
}
