use super::*;

#[test]
fn login_4xx_is_invalid_credentials() {
    assert_eq!(
        classify_status(Endpoint::Login, 401, Some("Incorrect email or password".to_owned())),
        AuthError::InvalidCredentials { detail: "Incorrect email or password".to_owned() }
    );
    assert_eq!(
        classify_status(Endpoint::Login, 422, None),
        AuthError::InvalidCredentials { detail: String::new() }
    );
}

#[test]
fn authenticated_401_and_403_expire_the_session() {
    assert_eq!(classify_status(Endpoint::Authenticated, 401, None), AuthError::SessionExpired);
    assert_eq!(
        classify_status(Endpoint::Authenticated, 403, Some("forbidden".to_owned())),
        AuthError::SessionExpired
    );
}

#[test]
fn authenticated_other_4xx_is_rejected() {
    assert_eq!(
        classify_status(Endpoint::Authenticated, 404, Some("not found".to_owned())),
        AuthError::Rejected { status: 404, detail: "not found".to_owned() }
    );
}

#[test]
fn public_401_is_not_treated_as_expiry() {
    assert_eq!(
        classify_status(Endpoint::Public, 401, None),
        AuthError::Rejected { status: 401, detail: String::new() }
    );
}

#[test]
fn any_5xx_is_server_error() {
    for endpoint in [Endpoint::Login, Endpoint::Authenticated, Endpoint::Public] {
        assert_eq!(classify_status(endpoint, 503, None), AuthError::Server { status: 503 });
    }
}

#[test]
fn user_message_prefers_api_detail() {
    let err = AuthError::Rejected { status: 400, detail: "Email already registered".to_owned() };
    assert_eq!(err.user_message(), "Email already registered");
}

#[test]
fn user_message_falls_back_per_kind() {
    assert_eq!(
        AuthError::InvalidCredentials { detail: String::new() }.user_message(),
        INVALID_CREDENTIALS_MESSAGE
    );
    assert_eq!(AuthError::SessionExpired.user_message(), SESSION_EXPIRED_MESSAGE);
    assert_eq!(AuthError::Network("dns".to_owned()).user_message(), NETWORK_MESSAGE);
    assert_eq!(AuthError::Server { status: 500 }.user_message(), SERVER_MESSAGE);
    assert_eq!(
        AuthError::Rejected { status: 409, detail: String::new() }.user_message(),
        "Request was rejected (409)."
    );
}

#[test]
fn only_transport_and_server_errors_are_retryable() {
    assert!(AuthError::Network("timeout".to_owned()).is_retryable());
    assert!(AuthError::Server { status: 502 }.is_retryable());
    assert!(!AuthError::SessionExpired.is_retryable());
    assert!(!AuthError::InvalidCredentials { detail: String::new() }.is_retryable());
    assert!(!AuthError::NotAuthenticated.is_retryable());
}

#[test]
fn display_keeps_transport_detail_for_logs() {
    assert_eq!(AuthError::Network("connection refused".to_owned()).to_string(), "network error: connection refused");
}
