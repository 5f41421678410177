use super::*;
use futures::executor::block_on;

#[test]
fn bearer_header_prefixes_scheme() {
    assert_eq!(bearer_header("abc.def"), "Bearer abc.def");
}

#[test]
fn endpoints_resolve_against_configured_base() {
    let store = HttpCredentialStore::new(ApiConfig::from_raw(Some("https://api.kokmaisa.ee/")));
    assert_eq!(store.config().endpoint(LOGIN_PATH), "https://api.kokmaisa.ee/login");
    assert_eq!(store.config().endpoint(ME_PATH), "https://api.kokmaisa.ee/me");
    assert_eq!(
        store.config().endpoint(PASSWORD_RESET_REQUEST_PATH),
        "https://api.kokmaisa.ee/password-reset-request"
    );
}

#[test]
fn calls_outside_browser_fail_as_network_errors() {
    let store = HttpCredentialStore::default();
    let login = LoginRequest { email: "a@x.com".to_owned(), password: "pw".to_owned() };
    assert!(matches!(block_on(store.login(&login)), Err(AuthError::Network(_))));
    assert!(matches!(block_on(store.fetch_me("tok")), Err(AuthError::Network(_))));
    assert!(matches!(
        block_on(store.request_password_reset(&PasswordResetRequest { email: "a@x.com".to_owned() })),
        Err(AuthError::Network(_))
    ));
}
