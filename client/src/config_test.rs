use super::*;

#[test]
fn from_raw_trims_trailing_slashes() {
    let cfg = ApiConfig::from_raw(Some("https://api.kokmaisa.ee/v1//"));
    assert_eq!(cfg.base_url, "https://api.kokmaisa.ee/v1");
}

#[test]
fn from_raw_blank_or_missing_uses_default() {
    assert_eq!(ApiConfig::from_raw(None), ApiConfig::default());
    assert_eq!(ApiConfig::from_raw(Some("   ")), ApiConfig::default());
    assert_eq!(ApiConfig::from_raw(Some("/")).base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn endpoint_joins_base_and_path() {
    let cfg = ApiConfig::from_raw(Some(" https://api.kokmaisa.ee/ "));
    assert_eq!(cfg.endpoint("/me"), "https://api.kokmaisa.ee/me");
    assert_eq!(ApiConfig::default().endpoint("/login"), "/api/login");
}

#[test]
fn from_environment_outside_browser_is_default() {
    assert_eq!(ApiConfig::from_environment(), ApiConfig::default());
}
