//! Wire DTOs exchanged with the KokMaisa REST API.
//!
//! DESIGN
//! ======
//! Field names follow the API's camelCase JSON. Snake-case aliases are
//! accepted on input so either server convention deserializes cleanly.
//! Role strings never leave this module as raw text: `AccountType` is the
//! only representation the rest of the crate sees.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Closed set of account categories. Fixed at registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Farmer,
    Agronomist,
}

impl AccountType {
    pub const ALL: [Self; 2] = [Self::Farmer, Self::Agronomist];

    /// Wire value (`"farmer"` / `"agronomist"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Farmer => "farmer",
            Self::Agronomist => "agronomist",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Farmer => "Farmer",
            Self::Agronomist => "Agronomist",
        }
    }

    /// Parse a wire value or form option. Case and surrounding whitespace are ignored.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|kind| kind.as_str().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An authenticated user as returned by `GET /me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server identifier. Numeric ids are normalized to strings.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub email: String,
    #[serde(alias = "full_name")]
    pub full_name: String,
    #[serde(alias = "account_type")]
    pub account_type: AccountType,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: String,
    /// Agronomist only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    /// Agronomist only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specializations: Vec<String>,
}

impl User {
    /// Merge a profile patch into this record.
    ///
    /// Role-specific fields are ignored for farmers. The account type is
    /// never touched; `UserPatch` has no field for it.
    pub fn apply(&mut self, patch: &UserPatch) {
        if let Some(full_name) = &patch.full_name {
            self.full_name.clone_from(full_name);
        }
        if let Some(phone) = &patch.phone {
            self.phone.clone_from(phone);
        }
        if let Some(country) = &patch.country {
            self.country.clone_from(country);
        }
        if let Some(city) = &patch.city {
            self.city.clone_from(city);
        }
        match self.account_type {
            AccountType::Agronomist => {
                if let Some(education) = &patch.education {
                    self.education = Some(education.clone()).filter(|e| !e.is_empty());
                }
                if let Some(specializations) = &patch.specializations {
                    self.specializations.clone_from(specializations);
                }
            }
            AccountType::Farmer => {}
        }
    }
}

/// Partial profile update sent with `PATCH /me`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specializations: Option<Vec<String>>,
}

impl UserPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.phone.is_none()
            && self.country.is_none()
            && self.city.is_none()
            && self.education.is_none()
            && self.specializations.is_none()
    }
}

/// Body of `POST /login`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of `POST /register`.
#[derive(Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub account_type: AccountType,
    pub phone: String,
    pub country: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub specializations: Vec<String>,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("full_name", &self.full_name)
            .field("account_type", &self.account_type)
            .finish_non_exhaustive()
    }
}

/// Successful answer of `POST /login` and `POST /register`.
#[derive(Clone, PartialEq, Deserialize)]
pub struct TokenResponse {
    #[serde(rename = "accessToken", alias = "access_token")]
    pub access_token: String,
    #[serde(default, rename = "tokenType", alias = "token_type")]
    pub token_type: Option<String>,
    /// Some deployments embed the user; when present `GET /me` is skipped.
    #[serde(default)]
    pub user: Option<User>,
}

impl fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("user", &self.user)
            .finish()
    }
}

/// Body of `POST /password-reset-request`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

/// Body of `POST /password-reset`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct PasswordReset {
    pub token: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

impl fmt::Debug for PasswordReset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordReset")
            .field("token", &"<redacted>")
            .field("new_password", &"<redacted>")
            .finish()
    }
}

/// Error payload returned with failing statuses.
///
/// `detail` is either a plain message or a list of validation entries
/// carrying a `msg` field.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: serde_json::Value,
}

impl ApiErrorBody {
    /// Flatten `detail` into one displayable line, if it carries any text.
    #[must_use]
    pub fn user_message(&self) -> Option<String> {
        detail_text(&self.detail)
    }
}

fn detail_text(detail: &serde_json::Value) -> Option<String> {
    match detail {
        serde_json::Value::String(text) => Some(text.trim().to_owned()).filter(|t| !t.is_empty()),
        serde_json::Value::Array(entries) => {
            let parts: Vec<String> = entries.iter().filter_map(detail_text).collect();
            if parts.is_empty() { None } else { Some(parts.join("; ")) }
        }
        serde_json::Value::Object(map) => map
            .get("msg")
            .or_else(|| map.get("message"))
            .and_then(detail_text),
        _ => None,
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or integer id")),
    }
}
