//! Bearer token decoding.
//!
//! Tokens are decoded, never verified: the backend checks signatures on every
//! request, the client only needs the identity claims and the expiry to decide
//! what to render.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use time::OffsetDateTime;

use crate::error::TokenError;
use crate::net::types::deserialize_optional_id;
use crate::role::Role;

/// base64url with or without trailing `=`.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Identity claims carried in the token payload.
///
/// ASP.NET issuers may emit the long claim-type URIs instead of the short
/// names; both spellings are accepted.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Claims {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub sub: Option<String>,
    #[serde(default, alias = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/name")]
    pub name: Option<String>,
    #[serde(
        default,
        alias = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role",
        deserialize_with = "deserialize_one_or_many"
    )]
    pub role: Vec<String>,
    #[serde(default)]
    pub unique_name: Option<String>,
    #[serde(
        default,
        alias = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier",
        deserialize_with = "deserialize_optional_id"
    )]
    pub nameid: Option<String>,
    /// Expiry in seconds since the Unix epoch.
    #[serde(deserialize_with = "deserialize_epoch_seconds")]
    pub exp: i64,
}

impl Claims {
    /// First recognized role label, if any.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role.iter().find_map(|label| Role::from_label(label))
    }

    /// Subject id: `sub`, falling back to `nameid`.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref().or(self.nameid.as_deref())
    }

    /// Name to greet the user with: `name`, then `unique_name`, then the subject.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .or(self.unique_name.as_deref())
            .or_else(|| self.subject())
    }

    /// # Errors
    ///
    /// Returns [`TokenError::InvalidExpiry`] when `exp` is outside the
    /// representable date range.
    pub fn expires_at(&self) -> Result<OffsetDateTime, TokenError> {
        OffsetDateTime::from_unix_timestamp(self.exp).map_err(|_| TokenError::InvalidExpiry(self.exp))
    }

    /// Whether the token is expired at `now` (expiry at or before `now`).
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::InvalidExpiry`] for an unrepresentable `exp`.
    pub fn is_expired_at(&self, now: OffsetDateTime) -> Result<bool, TokenError> {
        Ok(self.expires_at()? <= now)
    }
}

/// Decode the claims of a `header.payload.signature` token.
///
/// # Errors
///
/// Returns a [`TokenError`] when the token does not have three segments, the
/// payload is not base64url, or the payload is not a claims object.
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let mut segments = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return Err(TokenError::Malformed);
    };
    if payload.is_empty() {
        return Err(TokenError::Malformed);
    }
    let bytes = PAYLOAD_ENGINE.decode(payload)?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn deserialize_one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(Vec::new()),
        serde_json::Value::String(one) => Ok(vec![one]),
        serde_json::Value::Array(many) => many
            .into_iter()
            .map(|value| match value {
                serde_json::Value::String(s) => Ok(s),
                other => Err(D::Error::custom(format!("expected role string, got {other}"))),
            })
            .collect(),
        other => Err(D::Error::custom(format!("expected role string or array, got {other}"))),
    }
}

fn deserialize_epoch_seconds<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Number(number) = value else {
        return Err(D::Error::custom("expected numeric exp"));
    };
    if let Some(int) = number.as_i64() {
        return Ok(int);
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    if let Some(float) = number.as_f64()
        && float.is_finite()
        && float >= i64::MIN as f64
        && float <= i64::MAX as f64
    {
        // Fractional seconds round down: the token is dead within that second.
        return Ok(float.floor() as i64);
    }
    Err(D::Error::custom("exp out of range"))
}
