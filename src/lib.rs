//! # fieldbook
//!
//! Session core for the Fieldbook sports-field booking client.
//!
//! This crate owns everything about "who is signed in" that the browser app
//! needs: decoding and persisting the bearer token, the session store with
//! login/logout/register/verify operations, the closed [`Role`] set with its
//! route tables, and the route guard. It has no UI dependency; the Leptos app
//! in `client/` wires it into pages.

pub mod config;
pub mod error;
pub mod forms;
pub mod guard;
pub mod net;
pub mod role;
pub mod routes;
pub mod session;
pub mod storage;
pub mod token;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::ApiConfig;
pub use error::{AuthError, AuthOperation};
pub use guard::{Access, GuardDecision};
pub use net::http::{HttpClient, Transport};
pub use net::types::UserSummary;
pub use role::Role;
pub use session::{Session, SessionStore};
pub use storage::TokenStorage;
