use super::*;

#[test]
fn default_is_same_origin_with_short_timeout() {
    let cfg = ApiConfig::default();
    assert_eq!(cfg.base_url, "");
    assert_eq!(cfg.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    assert!(cfg.timeout < Duration::from_secs(10));
}

#[test]
fn from_override_trims_whitespace_and_trailing_slashes() {
    let cfg = ApiConfig::from_override(Some("  https://api.example.test//  "));
    assert_eq!(cfg.base_url, "https://api.example.test");
}

#[test]
fn from_override_blank_or_missing_is_same_origin() {
    assert_eq!(ApiConfig::from_override(None).base_url, "");
    assert_eq!(ApiConfig::from_override(Some("   ")).base_url, "");
}

#[test]
fn url_joins_paths_with_and_without_leading_slash() {
    let cfg = ApiConfig::new("https://api.example.test/");
    assert_eq!(cfg.url("/api/me"), "https://api.example.test/api/me");
    assert_eq!(cfg.url("api/me"), "https://api.example.test/api/me");
    assert_eq!(ApiConfig::default().url("/api/me"), "/api/me");
}

#[test]
fn with_timeout_overrides_default() {
    let cfg = ApiConfig::default().with_timeout(Duration::from_millis(250));
    assert_eq!(cfg.timeout, Duration::from_millis(250));
}

#[test]
fn from_env_reads_base_url_override() {
    // Only this test touches the variable.
    unsafe { std::env::set_var(BASE_URL_ENV, "http://127.0.0.1:9000/") };
    let cfg = ApiConfig::from_env();
    unsafe { std::env::remove_var(BASE_URL_ENV) };
    assert_eq!(cfg.base_url, "http://127.0.0.1:9000");
}
