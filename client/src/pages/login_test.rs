use super::*;
use crate::util::form::{EMAIL_INVALID, EMAIL_REQUIRED};

#[test]
fn validate_login_input_normalizes_email_and_keeps_password() {
    assert_eq!(
        validate_login_input("  A@X.com ", " pass word "),
        Ok(("a@x.com".to_owned(), " pass word ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_email() {
    assert_eq!(validate_login_input("", "secret"), Err(EMAIL_REQUIRED));
    assert_eq!(validate_login_input("nope", "secret"), Err(EMAIL_INVALID));
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(validate_login_input("a@x.com", ""), Err(PASSWORD_REQUIRED));
}
