use super::*;
use crate::test_support::{NOW, make_token, now, token_for};

#[test]
fn decodes_short_claim_names() {
    let claims = decode_claims(&token_for("KHÁCH HÀNG", 60)).unwrap();
    assert_eq!(claims.subject(), Some("u-1"));
    assert_eq!(claims.display_name(), Some("Alice Nguyen"));
    assert_eq!(claims.unique_name.as_deref(), Some("alice"));
    assert_eq!(claims.role(), Some(Role::Customer));
    assert_eq!(claims.exp, NOW + 60);
}

#[test]
fn decodes_long_claim_uris() {
    let token = make_token(&serde_json::json!({
        "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier": 42,
        "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/name": "Bob",
        "http://schemas.microsoft.com/ws/2008/06/identity/claims/role": "NHÂN VIÊN",
        "exp": NOW + 60,
    }));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.subject(), Some("42"));
    assert_eq!(claims.display_name(), Some("Bob"));
    assert_eq!(claims.role(), Some(Role::Staff));
}

#[test]
fn role_array_takes_first_recognized_label() {
    let token = make_token(&serde_json::json!({
        "sub": "u-2",
        "role": ["Auditor", "ADMIN", "KHÁCH HÀNG"],
        "exp": NOW + 60,
    }));
    assert_eq!(decode_claims(&token).unwrap().role(), Some(Role::Admin));
}

#[test]
fn unknown_role_yields_none() {
    let claims = decode_claims(&token_for("GUEST", 60)).unwrap();
    assert_eq!(claims.role(), None);
    assert_eq!(claims.role, vec!["GUEST".to_owned()]);
}

#[test]
fn display_name_falls_back_to_unique_name_then_subject() {
    let token = make_token(&serde_json::json!({ "sub": "u-3", "unique_name": "carol", "exp": NOW }));
    assert_eq!(decode_claims(&token).unwrap().display_name(), Some("carol"));
    let token = make_token(&serde_json::json!({ "sub": "u-3", "exp": NOW }));
    assert_eq!(decode_claims(&token).unwrap().display_name(), Some("u-3"));
}

#[test]
fn expiry_at_now_counts_as_expired() {
    let claims = decode_claims(&token_for("ADMIN", 0)).unwrap();
    assert!(claims.is_expired_at(now()).unwrap());
    let claims = decode_claims(&token_for("ADMIN", 1)).unwrap();
    assert!(!claims.is_expired_at(now()).unwrap());
}

#[test]
fn fractional_exp_rounds_down() {
    let token = make_token(&serde_json::json!({ "sub": "u", "exp": 1_000.9 }));
    assert_eq!(decode_claims(&token).unwrap().exp, 1_000);
}

#[test]
fn padded_payload_is_accepted() {
    let unpadded = token_for("ADMIN", 60);
    let parts: Vec<&str> = unpadded.split('.').collect();
    let padding = "=".repeat((4 - parts[1].len() % 4) % 4);
    let padded = format!("{}.{}{}.{}", parts[0], parts[1], padding, parts[2]);
    assert_eq!(decode_claims(&padded).unwrap(), decode_claims(&unpadded).unwrap());
}

#[test]
fn rejects_wrong_segment_count() {
    assert!(matches!(decode_claims("abc"), Err(TokenError::Malformed)));
    assert!(matches!(decode_claims("a.b"), Err(TokenError::Malformed)));
    assert!(matches!(decode_claims("a.b.c.d"), Err(TokenError::Malformed)));
    assert!(matches!(decode_claims("a..c"), Err(TokenError::Malformed)));
}

#[test]
fn rejects_non_base64_payload() {
    assert!(matches!(decode_claims("a.!!!.c"), Err(TokenError::Encoding(_))));
}

#[test]
fn rejects_payload_without_exp() {
    let token = make_token(&serde_json::json!({ "sub": "u-1" }));
    assert!(matches!(decode_claims(&token), Err(TokenError::Claims(_))));
}

#[test]
fn out_of_range_exp_is_reported() {
    let token = make_token(&serde_json::json!({ "sub": "u-1", "exp": i64::MAX }));
    let claims = decode_claims(&token).unwrap();
    assert!(matches!(claims.expires_at(), Err(TokenError::InvalidExpiry(_))));
}
