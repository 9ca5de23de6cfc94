//! Reusable UI components shared across pages.

pub mod form_field;
pub mod layout;
