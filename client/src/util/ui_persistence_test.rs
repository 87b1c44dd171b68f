use super::*;
use crate::state::ui::UiState;

#[test]
fn decode_accepts_partial_preferences() {
    let prefs: UiState = decode("prefs", r#"{"dark_mode":true}"#).unwrap();
    assert!(prefs.dark_mode);
    assert!(!prefs.sidebar_collapsed);
}

#[test]
fn decode_drops_malformed_values() {
    assert_eq!(decode::<UiState>("prefs", "not json"), None);
    assert_eq!(decode::<UiState>("prefs", r#"{"dark_mode":"yes"}"#), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_build_stores_nothing() {
    save_json("prefs", &UiState { dark_mode: true, sidebar_collapsed: true });
    assert_eq!(load_json::<UiState>("prefs"), None);
}
