//! Wire DTOs for the backend's `/api/Auth` endpoints.
//!
//! DESIGN
//! ======
//! Every backend reply is an envelope `{isSuccess, result, errorMessages}`.
//! [`interpret`] turns a raw response into a typed `Result` at the HTTP
//! boundary so a malformed body fails here with a typed error instead of
//! surfacing later as a missing field.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AuthError, AuthOperation};
use crate::role::Role;

pub const LOGIN_PATH: &str = "/api/Auth/login";
pub const REGISTER_PATH: &str = "/api/Auth/Register";
pub const EMAIL_VERIFICATION_PATH: &str = "/api/Auth/email-verification";

/// Response envelope shared by all backend endpoints.
///
/// `result` stays untyped until the envelope reports success, so a failure
/// reply with an unexpected `result` still surfaces its `errorMessages`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope {
    pub is_success: bool,
    pub result: Option<serde_json::Value>,
    pub error_messages: Option<Vec<String>>,
}

/// Body of `POST /api/Auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// `result` of a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResult {
    pub token: String,
    pub user: UserSummary,
}

/// User summary returned alongside the login token.
///
/// Field names vary between backend versions, so the Vietnamese spellings are
/// accepted as aliases.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[serde(default, alias = "userId", alias = "maNguoiDung", deserialize_with = "deserialize_optional_id")]
    pub id: Option<String>,
    #[serde(default, alias = "userName")]
    pub username: Option<String>,
    #[serde(default, alias = "hoTen")]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "vaiTro", alias = "tenVaiTro")]
    pub role: Option<String>,
}

impl UserSummary {
    /// Parsed role, `None` when absent or unrecognized.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role.as_deref().and_then(Role::from_label)
    }
}

/// Body of `POST /api/Auth/Register`, using the backend's field names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "hoTen")]
    pub full_name: String,
    #[serde(rename = "soDienThoai")]
    pub phone_number: String,
    #[serde(rename = "tenVaiTro")]
    pub role: Role,
    /// `YYYY-MM-DD` as produced by a date input.
    #[serde(rename = "ngaySinh")]
    pub birth_date: String,
    #[serde(rename = "gioiTinh")]
    pub gender: Gender,
}

/// Gender options offered at sign-up, serialized with the backend labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "Nam")]
    Male,
    #[serde(rename = "Nữ")]
    Female,
    #[serde(rename = "Khác")]
    Other,
}

impl Gender {
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Other];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Nam",
            Self::Female => "Nữ",
            Self::Other => "Khác",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }

    #[must_use]
    pub fn from_label(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.label() == raw.trim())
    }
}

/// Body of `POST /api/Auth/email-verification`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailVerificationRequest<'a> {
    pub email: &'a str,
    pub code: &'a str,
}

/// Interpret a raw backend response for `operation`.
///
/// A 2xx status with `isSuccess: true` yields the optional `result`, decoded
/// as `T`. Any other parseable envelope becomes [`AuthError::Rejected`] with
/// the joined `errorMessages`, whatever its `result` holds. An unparseable
/// body, or a success `result` that is not a `T`, becomes
/// [`AuthError::MalformedResponse`].
///
/// # Errors
///
/// See above.
pub fn interpret<T: DeserializeOwned>(
    operation: AuthOperation,
    status: u16,
    body: &str,
) -> Result<Option<T>, AuthError> {
    let envelope: ApiEnvelope = serde_json::from_str(body).map_err(|e| AuthError::MalformedResponse {
        operation,
        detail: format!("status {status}: {e}"),
    })?;
    if !envelope.is_success || !(200..300).contains(&status) {
        return Err(AuthError::rejected(operation, &envelope.error_messages.unwrap_or_default()));
    }
    envelope
        .result
        .map(serde_json::from_value)
        .transpose()
        .map_err(|e| AuthError::MalformedResponse { operation, detail: format!("result: {e}") })
}

/// Accept an id as either a JSON string or an integer.
pub(crate) fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) if n.is_i64() || n.is_u64() => Ok(Some(n.to_string())),
        other => Err(D::Error::custom(format!("expected string or integer id, got {other}"))),
    }
}
