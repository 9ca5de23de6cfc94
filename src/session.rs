//! Session store: who is signed in, and the persisted token's lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`SessionStore`] is the single source of truth for the current
//! [`Session`]. It is an explicit handle (cloned into UI context, never a
//! global) that owns the token in [`TokenStorage`] and publishes every change
//! to subscribers. The route guard and views only read from it.
//!
//! INVARIANTS
//! ==========
//! - An exposed session's token decoded successfully and had not expired at
//!   the last hydration.
//! - Decode failure and expiry are handled identically: a silent logout.
//! - `register` and `verify_email` never touch the session.
//!
//! Concurrent `login` calls are not serialized; whichever response resolves
//! last decides the stored token.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use serde::de::IgnoredAny;
use time::OffsetDateTime;

use crate::error::{AuthError, AuthOperation, TokenError};
use crate::forms::{RegistrationForm, validate_login_input, validate_verification_input};
use crate::net::http::HttpClient;
use crate::net::types::{
    EMAIL_VERIFICATION_PATH, EmailVerificationRequest, LOGIN_PATH, LoginRequest, LoginResult, REGISTER_PATH,
    UserSummary, interpret,
};
use crate::role::Role;
use crate::storage::TokenStorage;
use crate::token::decode_claims;

/// Storage key of the persisted bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Source of "now" for expiry checks.
pub type Clock = Arc<dyn Fn() -> OffsetDateTime + Send + Sync>;

/// Handle returned by [`SessionStore::subscribe`].
pub type ListenerId = u64;

type Listener = Arc<dyn Fn(Option<&Session>) + Send + Sync>;

/// The currently authenticated user, derived from the bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub subject_id: String,
    pub display_name: String,
    /// `None` when the token carries no recognized role label.
    pub role: Option<Role>,
    pub unique_name: Option<String>,
    pub name_id: Option<String>,
    pub raw_token: String,
    pub expires_at: OffsetDateTime,
}

impl Session {
    /// Decode `token` and accept it if it is still valid at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError`] if the token cannot be decoded, has no subject,
    /// or expires at or before `now`.
    pub fn from_token(token: &str, now: OffsetDateTime) -> Result<Self, TokenError> {
        let claims = decode_claims(token)?;
        if claims.is_expired_at(now)? {
            return Err(TokenError::Expired(claims.exp));
        }
        let subject_id = claims.subject().ok_or(TokenError::MissingSubject)?.to_owned();
        Ok(Self {
            display_name: claims.display_name().unwrap_or(subject_id.as_str()).to_owned(),
            role: claims.role(),
            unique_name: claims.unique_name.clone(),
            name_id: claims.nameid.clone(),
            raw_token: token.trim().to_owned(),
            expires_at: claims.expires_at()?,
            subject_id,
        })
    }

    #[must_use]
    pub fn has_role(&self, allowed: &[Role]) -> bool {
        self.role.is_some_and(|role| allowed.contains(&role))
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("subject_id", &self.subject_id)
            .field("display_name", &self.display_name)
            .field("role", &self.role)
            .field("unique_name", &self.unique_name)
            .field("name_id", &self.name_id)
            .field("raw_token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

struct Inner {
    http: HttpClient,
    storage: Arc<dyn TokenStorage>,
    clock: Clock,
    session: RwLock<Option<Session>>,
    listeners: RwLock<Vec<(ListenerId, Listener)>>,
    next_listener: AtomicU64,
}

/// Cloneable handle to the one session store of an application.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl SessionStore {
    /// Store over `http`'s token storage, using the system clock.
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self::with_clock(http, Arc::new(OffsetDateTime::now_utc))
    }

    #[must_use]
    pub fn with_clock(http: HttpClient, clock: Clock) -> Self {
        let storage = http.storage();
        Self {
            inner: Arc::new(Inner {
                http,
                storage,
                clock,
                session: RwLock::new(None),
                listeners: RwLock::new(Vec::new()),
                next_listener: AtomicU64::new(1),
            }),
        }
    }

    /// Native store talking to `config.base_url` over `reqwest`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::TransportError`] if the HTTP client cannot be built.
    #[cfg(feature = "native")]
    pub fn connect(
        config: &crate::config::ApiConfig,
        storage: Arc<dyn TokenStorage>,
    ) -> Result<Self, crate::error::TransportError> {
        let transport = Arc::new(crate::net::http::ReqwestTransport::new(config)?);
        Ok(Self::new(HttpClient::new(config, transport, storage)))
    }

    /// Client used for every backend call, carrying the session's bearer token.
    #[must_use]
    pub fn http(&self) -> &HttpClient {
        &self.inner.http
    }

    #[must_use]
    pub fn current(&self) -> Option<Session> {
        self.inner.session.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner.session.read().unwrap_or_else(PoisonError::into_inner).is_some()
    }

    /// Call `listener` with the new session after every change.
    pub fn subscribe(&self, listener: impl Fn(Option<&Session>) + Send + Sync + 'static) -> ListenerId {
        let id = self.inner.next_listener.fetch_add(1, Ordering::Relaxed);
        let listener: Listener = Arc::new(listener);
        self.inner
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, listener));
        id
    }

    /// Returns whether a listener was removed.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.inner.listeners.write().unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    /// Rebuild the session from the persisted token.
    ///
    /// Run at startup and whenever the persisted token changes. A missing,
    /// undecodable or expired token ends in [`SessionStore::logout`].
    pub fn hydrate(&self) -> Option<Session> {
        let token = match self.inner.storage.get(TOKEN_STORAGE_KEY) {
            Ok(token) => token.filter(|t| !t.trim().is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "token storage unreadable during hydration");
                None
            }
        };
        let Some(token) = token else {
            self.logout();
            return None;
        };
        match self.adopt(&token) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::debug!(error = %e, "discarding persisted token");
                self.logout();
                None
            }
        }
    }

    /// Sign in with `username` and `password`.
    ///
    /// On success the token is persisted, the session is rebuilt from it and
    /// the backend's user summary is returned.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] whose `Display` is ready to show: validation
    /// errors, joined backend messages, or a generic fallback.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserSummary, AuthError> {
        const OP: AuthOperation = AuthOperation::Login;
        let (username, password) = validate_login_input(username, password)?;
        let response = self
            .inner
            .http
            .post_json(LOGIN_PATH, &LoginRequest { username, password })
            .await
            .map_err(|source| AuthError::Transport { operation: OP, source })?;
        let result: LoginResult = interpret(OP, response.status, &response.body)
            .inspect_err(|e| tracing::info!(error = ?e, username, "login rejected"))?
            .ok_or_else(|| AuthError::MalformedResponse { operation: OP, detail: "missing result".to_owned() })?;

        self.inner.storage.set(TOKEN_STORAGE_KEY, &result.token)?;
        match self.adopt(&result.token) {
            Ok(session) => {
                tracing::info!(subject = %session.subject_id, role = ?session.role, "signed in");
                Ok(result.user)
            }
            Err(e) => {
                tracing::warn!(error = %e, "login returned an unusable token");
                self.logout();
                Err(AuthError::InvalidToken(e))
            }
        }
    }

    /// Clear the session and the persisted token. Never fails, never calls the backend.
    pub fn logout(&self) {
        if let Err(e) = self.inner.storage.remove(TOKEN_STORAGE_KEY) {
            tracing::warn!(error = %e, "failed to remove persisted token");
        }
        self.inner.http.set_default_bearer(None);
        if self.replace(None) {
            tracing::info!("signed out");
        }
    }

    /// Create an account. Registration does not sign the user in.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] before any request when the form is
    /// invalid, otherwise backend or transport failures.
    pub async fn register(&self, form: &RegistrationForm) -> Result<(), AuthError> {
        const OP: AuthOperation = AuthOperation::Register;
        let request = form.to_request()?;
        let response = self
            .inner
            .http
            .post_json(REGISTER_PATH, &request)
            .await
            .map_err(|source| AuthError::Transport { operation: OP, source })?;
        interpret::<IgnoredAny>(OP, response.status, &response.body)?;
        tracing::info!(username = %request.username, role = %request.role, "registered");
        Ok(())
    }

    /// Confirm an email address with the code the backend sent.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] for blank input, otherwise backend or
    /// transport failures.
    pub async fn verify_email(&self, email: &str, code: &str) -> Result<(), AuthError> {
        const OP: AuthOperation = AuthOperation::VerifyEmail;
        let (email, code) = validate_verification_input(email, code)?;
        let response = self
            .inner
            .http
            .post_json(EMAIL_VERIFICATION_PATH, &EmailVerificationRequest { email, code })
            .await
            .map_err(|source| AuthError::Transport { operation: OP, source })?;
        interpret::<IgnoredAny>(OP, response.status, &response.body)?;
        Ok(())
    }

    /// Accept `token` as the session and default bearer.
    fn adopt(&self, token: &str) -> Result<Session, TokenError> {
        let session = Session::from_token(token, (self.inner.clock)())?;
        self.inner.http.set_default_bearer(Some(session.raw_token.clone()));
        self.replace(Some(session.clone()));
        Ok(session)
    }

    /// Swap the session and notify listeners if it changed. Returns whether it changed.
    fn replace(&self, next: Option<Session>) -> bool {
        {
            let mut current = self.inner.session.write().unwrap_or_else(PoisonError::into_inner);
            if *current == next {
                return false;
            }
            current.clone_from(&next);
        }
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(next.as_ref());
        }
        true
    }
}
