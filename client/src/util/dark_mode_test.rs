use super::*;

#[test]
fn theme_name_maps_flag() {
    assert_eq!(theme_name(true), "dark");
    assert_eq!(theme_name(false), "light");
}

#[cfg(not(feature = "csr"))]
#[test]
fn system_preference_is_light_outside_the_browser() {
    assert!(!system_prefers_dark());
}

#[cfg(not(feature = "csr"))]
#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}
