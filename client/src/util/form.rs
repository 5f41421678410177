//! Form input normalization and validation shared by the auth pages.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

pub const MIN_PASSWORD_LEN: usize = 8;

pub const EMAIL_REQUIRED: &str = "Enter your email address.";
pub const EMAIL_INVALID: &str = "Enter a valid email address.";
pub const PASSWORD_REQUIRED: &str = "Enter your password.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters.";
pub const PASSWORDS_DIFFER: &str = "Passwords do not match.";

/// Trim and lowercase an email, then check its basic shape.
///
/// # Errors
///
/// Returns the message to show next to the field.
pub fn normalize_email(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim().to_ascii_lowercase();
    if email.is_empty() {
        return Err(EMAIL_REQUIRED);
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err(EMAIL_INVALID);
    };
    let domain_ok = domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.');
    if local.is_empty() || !domain_ok || email.chars().any(char::is_whitespace) {
        return Err(EMAIL_INVALID);
    }
    Ok(email)
}

/// Check a new password and its confirmation.
///
/// # Errors
///
/// Returns the message to show next to the field.
pub fn validate_new_password(password: &str, confirm: &str) -> Result<(), &'static str> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PASSWORD_TOO_SHORT);
    }
    if password != confirm {
        return Err(PASSWORDS_DIFFER);
    }
    Ok(())
}

/// Split a comma-separated list, dropping blanks and duplicates.
#[must_use]
pub fn parse_list(raw: &str) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    for item in raw.split(',').map(str::trim).filter(|i| !i.is_empty()) {
        if !items.iter().any(|seen| seen.eq_ignore_ascii_case(item)) {
            items.push(item.to_owned());
        }
    }
    items
}

/// Trimmed value, or `None` when blank.
#[must_use]
pub fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
