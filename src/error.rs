//! Error types for the session core.
//!
//! ERROR HANDLING
//! ==============
//! Backend-facing operations resolve to `Result<_, AuthError>` and never panic.
//! The `Display` output of an [`AuthError`] is the message a view shows
//! verbatim, so transport and decode details stay in the `source` chain and
//! the tracing output instead of the user-facing string.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Backend operation an [`AuthError`] came from.
///
/// Used to pick the generic fallback message when the backend gave nothing
/// better to display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthOperation {
    Login,
    Register,
    VerifyEmail,
}

impl AuthOperation {
    /// User-facing message shown when no backend error text is available.
    #[must_use]
    pub fn fallback_message(self) -> &'static str {
        match self {
            Self::Login => "Login failed. Please try again.",
            Self::Register => "Registration failed. Please try again.",
            Self::VerifyEmail => "Email verification failed. Please try again.",
        }
    }
}

/// Failure of a session-store operation.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No response arrived (connection refused, DNS, timeout, CORS).
    #[error("{}", .operation.fallback_message())]
    Transport {
        operation: AuthOperation,
        #[source]
        source: TransportError,
    },

    /// The backend answered with `isSuccess: false` or an error status.
    #[error("{message}")]
    Rejected { operation: AuthOperation, message: String },

    /// The backend answered with a body that does not match the envelope schema.
    #[error("{}", .operation.fallback_message())]
    MalformedResponse { operation: AuthOperation, detail: String },

    /// Input rejected before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// Login succeeded but the returned token could not be used.
    #[error("Login failed. The server returned an unusable session token.")]
    InvalidToken(#[from] TokenError),

    /// The token could not be written to durable storage.
    #[error("Could not save your session. Please try again.")]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Build a rejection from backend `errorMessages`, joined with `", "`.
    ///
    /// An empty list falls back to the operation's generic message.
    #[must_use]
    pub fn rejected(operation: AuthOperation, messages: &[String]) -> Self {
        let joined = messages
            .iter()
            .map(|m| m.trim())
            .filter(|m| !m.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        let message = if joined.is_empty() { operation.fallback_message().to_owned() } else { joined };
        Self::Rejected { operation, message }
    }
}

/// Failure to get any response from the backend.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request could not be built or sent.
    #[error("request failed: {0}")]
    Request(String),
    /// A response arrived but its body could not be read.
    #[error("response body unreadable: {0}")]
    Body(String),
}

/// Failure to decode or accept a bearer token.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// Not a `header.payload.signature` string.
    #[error("token is not a three-part JWT")]
    Malformed,
    /// The payload segment is not base64url.
    #[error("token payload is not valid base64url: {0}")]
    Encoding(#[from] base64::DecodeError),
    /// The payload is not a JSON claims object.
    #[error("token claims are invalid: {0}")]
    Claims(#[from] serde_json::Error),
    /// Neither `sub` nor `nameid` is present.
    #[error("token has no subject")]
    MissingSubject,
    /// `exp` cannot be represented as a timestamp.
    #[error("token expiry {0} is out of range")]
    InvalidExpiry(i64),
    /// `exp` is at or before the current time.
    #[error("token expired at {0}")]
    Expired(i64),
}

/// Failure of the durable token storage.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    /// Browser storage is missing or refused the operation.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Invalid API configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid base URL `{0}`: expected an http:// or https:// URL")]
    InvalidBaseUrl(String),
    #[error("invalid value `{value}` for {var}")]
    Parse { var: &'static str, value: String },
}
