//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates form widgets and
//! the authenticated shell to `components`. Access control happens in the
//! router, never inside a page.

pub mod auth;
pub mod dashboard;
pub mod public;
