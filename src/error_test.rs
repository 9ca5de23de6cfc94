use super::*;

#[test]
fn rejected_joins_backend_messages() {
    let err = AuthError::rejected(
        AuthOperation::Register,
        &["Username taken".to_owned(), "Email taken".to_owned()],
    );
    assert_eq!(err.to_string(), "Username taken, Email taken");
}

#[test]
fn rejected_with_no_messages_uses_fallback() {
    let err = AuthError::rejected(AuthOperation::Login, &[]);
    assert_eq!(err.to_string(), "Login failed. Please try again.");
}

#[test]
fn rejected_skips_blank_messages() {
    let err = AuthError::rejected(AuthOperation::Login, &["  ".to_owned(), "Locked".to_owned()]);
    assert_eq!(err.to_string(), "Locked");
}

#[test]
fn transport_error_displays_operation_fallback() {
    let err = AuthError::Transport {
        operation: AuthOperation::VerifyEmail,
        source: TransportError::Request("connection refused".to_owned()),
    };
    assert_eq!(err.to_string(), "Email verification failed. Please try again.");
    let source = std::error::Error::source(&err).map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("request failed: connection refused"));
}

#[test]
fn malformed_response_hides_detail() {
    let err = AuthError::MalformedResponse {
        operation: AuthOperation::Register,
        detail: "expected value at line 1".to_owned(),
    };
    assert_eq!(err.to_string(), "Registration failed. Please try again.");
}
