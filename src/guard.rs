//! Route guard: render, or redirect, for the current session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Evaluated synchronously on every render of a route and never cached, so a
//! logout while a protected page is mounted flips the decision on the very
//! next evaluation. The guard only reads the session.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::role::{LOGIN_ROUTE, PUBLIC_HOME_ROUTE, Role, landing_route};
use crate::routes;
use crate::session::Session;

/// Who may open a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Anyone, signed in or not.
    Public,
    /// The application root: visitors see it, signed-in users with a
    /// recognized role are sent on to their home route.
    Landing,
    /// Only visitors; signed-in users are sent to their landing route.
    GuestOnly,
    /// Signed-in users whose role is in the allow-list.
    Protected(&'static [Role]),
}

/// Outcome of one guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the view (inside the layout shell for protected routes).
    Render,
    /// Nobody is signed in.
    RedirectToLogin,
    /// Signed in, but the role is not allowed here.
    RedirectHome,
    /// Signed in on a guest-only or unknown route.
    RedirectToLanding(&'static str),
}

impl GuardDecision {
    /// Route to navigate to, or `None` to render.
    #[must_use]
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            Self::Render => None,
            Self::RedirectToLogin => Some(LOGIN_ROUTE),
            Self::RedirectHome => Some(PUBLIC_HOME_ROUTE),
            Self::RedirectToLanding(path) => Some(path),
        }
    }
}

/// Decide a protected route with allow-list `allowed`.
///
/// Authentication is checked before the role.
#[must_use]
pub fn evaluate(session: Option<&Session>, allowed: &[Role]) -> GuardDecision {
    match session {
        None => GuardDecision::RedirectToLogin,
        Some(session) if session.has_role(allowed) => GuardDecision::Render,
        Some(_) => GuardDecision::RedirectHome,
    }
}

#[must_use]
pub fn evaluate_access(session: Option<&Session>, access: Access) -> GuardDecision {
    match access {
        Access::Public => GuardDecision::Render,
        Access::Landing => match session.and_then(|s| s.role) {
            Some(role) => GuardDecision::RedirectToLanding(role.home_route()),
            None => GuardDecision::Render,
        },
        Access::GuestOnly => match session {
            None => GuardDecision::Render,
            Some(session) => GuardDecision::RedirectToLanding(landing_route(session.role)),
        },
        Access::Protected(allowed) => evaluate(session, allowed),
    }
}

/// Target of the catch-all route: the role's landing route, or login when
/// nobody is signed in.
#[must_use]
pub fn fallback_target(session: Option<&Session>) -> &'static str {
    session.map_or(LOGIN_ROUTE, |s| landing_route(s.role))
}

/// Decide an arbitrary path: resolve it against the route table, then apply
/// its access policy. Unknown paths go to [`fallback_target`].
#[must_use]
pub fn decide_path(session: Option<&Session>, path: &str) -> GuardDecision {
    match routes::resolve(path) {
        Some(matched) => evaluate_access(session, matched.route.access()),
        None => GuardDecision::RedirectToLanding(fallback_target(session)),
    }
}
