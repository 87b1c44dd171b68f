use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::http::Method;
use crate::test_support::{ScriptedTransport, alice_json, client};

#[test]
fn fetch_me_parses_user() {
    let http = client(ScriptedTransport::new().respond(200, alice_json()));
    let me = block_on(fetch_me(&http)).unwrap();
    assert_eq!(me.username, "alice");
    assert_eq!(http.transport().calls(), vec![(Method::Get, ME_PATH.to_owned())]);
}

#[test]
fn login_posts_credentials() {
    let http = client(ScriptedTransport::new().respond(200, json!({ "ok": true })));
    let request = LoginRequest {
        username: "alice".to_owned(),
        password: "secret".to_owned(),
    };
    block_on(login(&http, &request)).unwrap();
    let requests = http.transport().requests();
    let sent = &requests[0];
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.url, LOGIN_PATH);
    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({ "username": "alice", "password": "secret" }));
}

#[test]
fn logout_accepts_empty_body() {
    let http = client(ScriptedTransport::new().respond_raw(204, ""));
    block_on(logout(&http)).unwrap();
    assert_eq!(http.transport().calls(), vec![(Method::Post, LOGOUT_PATH.to_owned())]);
}

#[test]
fn signup_accepts_created_and_reports_conflict() {
    let request = SignupRequest {
        username: "alice".to_owned(),
        password: "secret".to_owned(),
        email: Some("alice@example.test".to_owned()),
    };
    let http = client(ScriptedTransport::new().respond(201, json!({})).respond(409, json!({})));
    block_on(signup(&http, &request)).unwrap();
    assert_eq!(block_on(signup(&http, &request)).unwrap_err().status(), Some(409));
}
