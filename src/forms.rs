//! Client-side validation for the auth forms.
//!
//! Validation runs before any request is built, so a rejected form never
//! reaches the network.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::error::AuthError;
use crate::net::types::{Gender, RegisterRequest};
use crate::role::Role;

pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const LOGIN_FIELDS_REQUIRED: &str = "Enter both username and password.";
pub const VERIFICATION_FIELDS_REQUIRED: &str = "Enter both email and verification code.";
pub const INVALID_EMAIL: &str = "Enter a valid email address.";
pub const ROLE_NOT_SELF_REGISTRABLE: &str = "That role cannot be chosen at sign-up.";

/// Sign-up form as the UI collects it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub full_name: String,
    pub phone_number: String,
    /// `YYYY-MM-DD` from a date input.
    pub birth_date: String,
    pub gender: Option<Gender>,
    pub role: Role,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            full_name: String::new(),
            phone_number: String::new(),
            birth_date: String::new(),
            gender: None,
            role: Role::Customer,
        }
    }
}

impl RegistrationForm {
    /// Validate and map UI fields onto the backend's field names.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] with the first problem found.
    pub fn to_request(&self) -> Result<RegisterRequest, AuthError> {
        if self.password != self.confirm_password {
            return Err(invalid(PASSWORD_MISMATCH));
        }
        let username = required(&self.username, "Username")?;
        let email = required(&self.email, "Email")?;
        if !looks_like_email(&email) {
            return Err(invalid(INVALID_EMAIL));
        }
        if self.password.is_empty() {
            return Err(invalid("Password is required."));
        }
        let full_name = required(&self.full_name, "Full name")?;
        let birth_date = required(&self.birth_date, "Date of birth")?;
        let gender = self.gender.ok_or_else(|| invalid("Gender is required."))?;
        let phone_number = required(&self.phone_number, "Phone number")?;
        if !self.role.is_self_registrable() {
            return Err(invalid(ROLE_NOT_SELF_REGISTRABLE));
        }
        Ok(RegisterRequest {
            username,
            email,
            password: self.password.clone(),
            full_name,
            phone_number,
            role: self.role,
            birth_date,
            gender,
        })
    }
}

/// Trim the username and require both fields. The password is sent as typed.
///
/// # Errors
///
/// Returns [`AuthError::Validation`] when either field is blank.
pub fn validate_login_input<'a>(username: &'a str, password: &'a str) -> Result<(&'a str, &'a str), AuthError> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(invalid(LOGIN_FIELDS_REQUIRED));
    }
    Ok((username, password))
}

/// Trim and require both the email and the code.
///
/// # Errors
///
/// Returns [`AuthError::Validation`] when either field is blank.
pub fn validate_verification_input<'a>(email: &'a str, code: &'a str) -> Result<(&'a str, &'a str), AuthError> {
    let email = email.trim();
    let code = code.trim();
    if email.is_empty() || code.is_empty() {
        return Err(invalid(VERIFICATION_FIELDS_REQUIRED));
    }
    Ok((email, code))
}

fn required(value: &str, field: &str) -> Result<String, AuthError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AuthError::Validation(format!("{field} is required.")));
    }
    Ok(trimmed.to_owned())
}

fn looks_like_email(value: &str) -> bool {
    value
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.') && !domain.starts_with('.'))
}

fn invalid(message: &str) -> AuthError {
    AuthError::Validation(message.to_owned())
}
