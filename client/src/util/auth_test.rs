use super::*;

#[test]
fn requested_location_without_query() {
    assert_eq!(requested_location("/admin", ""), "/admin");
}

#[test]
fn requested_location_accepts_search_with_or_without_question_mark() {
    assert_eq!(requested_location("/chat", "?room=2"), "/chat?room=2");
    assert_eq!(requested_location("/chat", "room=2"), "/chat?room=2");
}

#[test]
fn requested_location_defaults_empty_path_to_root() {
    assert_eq!(requested_location("", ""), "/");
}

#[test]
fn requested_location_round_trips_through_login_redirect() {
    let requested = requested_location("/admin", "tab=users");
    let redirect = session::login_redirect(&requested);
    assert_eq!(redirect, "/login?next=%2Fadmin%3Ftab%3Dusers");
}
