use super::*;
use crate::util::form::{EMAIL_REQUIRED, PASSWORDS_DIFFER};

#[test]
fn reset_request_normalizes_email() {
    assert_eq!(
        build_reset_request(" A@X.com "),
        Ok(PasswordResetRequest { email: "a@x.com".to_owned() })
    );
    assert_eq!(build_reset_request(""), Err(EMAIL_REQUIRED));
}

#[test]
fn password_reset_requires_token_from_link() {
    assert_eq!(build_password_reset(None, "longenough", "longenough"), Err(RESET_TOKEN_MISSING));
    assert_eq!(build_password_reset(Some("  "), "longenough", "longenough"), Err(RESET_TOKEN_MISSING));
}

#[test]
fn password_reset_validates_new_password() {
    assert_eq!(build_password_reset(Some("tok"), "longenough", "other-value"), Err(PASSWORDS_DIFFER));
}

#[test]
fn password_reset_builds_request() {
    let reset = build_password_reset(Some(" tok-123 "), "longenough", "longenough").unwrap();
    assert_eq!(reset.token, "tok-123");
    assert_eq!(reset.new_password, "longenough");
}
