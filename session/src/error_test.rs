use super::*;

fn status(status: u16) -> ApiError {
    ApiError::Status { status, message: None }
}

#[test]
fn unauthorized_probe_is_unauthenticated_not_an_error() {
    let classified = classify(&status(401), Operation::Probe);
    assert_eq!(classified.kind, ErrorKind::Unauthenticated);
}

#[test]
fn unauthorized_login_is_invalid_credentials() {
    let classified = classify(&status(401), Operation::Login);
    assert_eq!(classified.kind, ErrorKind::InvalidCredentials);
    assert_eq!(classified.message, "Invalid credentials");
}

#[test]
fn unauthorized_identity_after_login_is_not_blamed_on_credentials() {
    let classified = classify(&status(401), Operation::Establish);
    assert_eq!(classified.kind, ErrorKind::SessionNotEstablished);
    assert_eq!(classified.message, SESSION_NOT_ESTABLISHED_MESSAGE);
}

#[test]
fn conflict_on_signup_reports_taken_username() {
    let classified = classify(&status(409), Operation::Signup);
    assert_eq!(classified.kind, ErrorKind::Conflict);
    assert_eq!(classified.message, USERNAME_TAKEN_MESSAGE);
}

#[test]
fn server_errors_ask_to_try_again_later() {
    for code in [500, 502, 503, 504] {
        let classified = classify(&status(code), Operation::Login);
        assert_eq!(classified.kind, ErrorKind::Server);
        assert_eq!(classified.message, SERVER_MESSAGE);
    }
}

#[test]
fn transport_failures_are_transient() {
    let classified = classify(&ApiError::from(TransportError::Timeout), Operation::Probe);
    assert_eq!(classified.kind, ErrorKind::Transient);
    let classified = classify(
        &ApiError::from(TransportError::Network("connection refused".to_owned())),
        Operation::Login,
    );
    assert_eq!(classified.message, NETWORK_MESSAGE);
}

#[test]
fn other_client_errors_prefer_server_message() {
    let err = ApiError::Status {
        status: 422,
        message: Some("password too short".to_owned()),
    };
    let classified = classify(&err, Operation::Signup);
    assert_eq!(classified.kind, ErrorKind::Rejected);
    assert_eq!(classified.message, "password too short");

    let classified = classify(&status(403), Operation::Login);
    assert_eq!(classified.message, "Request failed (403)");
}

#[test]
fn malformed_json_is_a_server_problem() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let classified = classify(&ApiError::from(json_err), Operation::Probe);
    assert_eq!(classified.kind, ErrorKind::Server);
    assert_eq!(classified.message, MALFORMED_MESSAGE);
}

#[test]
fn auth_error_exposes_kind_and_message() {
    assert_eq!(AuthError::Busy.kind(), ErrorKind::Busy);
    assert_eq!(AuthError::Busy.message(), BUSY_MESSAGE);
    let failed = AuthError::Failed(classify(&status(401), Operation::Login));
    assert_eq!(failed.to_string(), "Invalid credentials");
}
