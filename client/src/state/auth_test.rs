use super::*;
use session::CurrentUser;

fn alice() -> CurrentUser {
    serde_json::from_value(serde_json::json!({ "id": "1", "username": "alice", "roles": ["user"] })).unwrap()
}

#[test]
fn should_refresh_only_settled_sessions() {
    assert!(should_refresh(&AuthState::authenticated(alice())));
    assert!(!should_refresh(&AuthState::anonymous()));
    assert!(!should_refresh(&AuthState::pending()));

    let mut loading = AuthState::authenticated(alice());
    loading.loading = true;
    assert!(!should_refresh(&loading));
}

#[cfg(not(feature = "csr"))]
#[test]
fn context_mirrors_store_transitions() {
    let context = AuthContext::new(AuthStore::new(crate::net::api_client()));
    assert!(context.state.get_untracked().loading);
    futures::executor::block_on(context.store().bootstrap()).unwrap();
    assert_eq!(context.state.get_untracked(), AuthState::anonymous());
}
