use super::*;

// =============================================================
// Labels
// =============================================================

#[test]
fn labels_round_trip_for_every_role() {
    for role in Role::ALL {
        assert_eq!(Role::from_label(role.label()), Some(role));
    }
}

#[test]
fn from_label_ignores_case_and_whitespace() {
    assert_eq!(Role::from_label("  admin "), Some(Role::Admin));
    assert_eq!(Role::from_label("chủ sân"), Some(Role::FieldOwner));
    assert_eq!(Role::from_label("Khách Hàng"), Some(Role::Customer));
}

#[test]
fn from_label_rejects_unknown() {
    assert_eq!(Role::from_label("SUPERUSER"), None);
    assert_eq!(Role::from_label(""), None);
}

#[test]
fn serde_uses_backend_labels() {
    assert_eq!(serde_json::to_string(&Role::Staff).unwrap(), "\"NHÂN VIÊN\"");
    let role: Role = serde_json::from_str("\"CHỦ SÂN\"").unwrap();
    assert_eq!(role, Role::FieldOwner);
}

// =============================================================
// Routes
// =============================================================

#[test]
fn home_routes_match_role_sections() {
    assert_eq!(Role::Admin.home_route(), "/admin");
    assert_eq!(Role::FieldOwner.home_route(), "/owner");
    assert_eq!(Role::Staff.home_route(), "/staff");
    assert_eq!(Role::Customer.home_route(), "/customer");
}

#[test]
fn landing_route_falls_back_to_public_home() {
    assert_eq!(landing_route(None), PUBLIC_HOME_ROUTE);
    assert_eq!(landing_route(Some(Role::Staff)), "/staff");
    assert_eq!(landing_route_for_label(Some("GUEST")), PUBLIC_HOME_ROUTE);
    assert_eq!(landing_route_for_label(None), PUBLIC_HOME_ROUTE);
    assert_eq!(landing_route_for_label(Some("admin")), "/admin");
}

#[test]
fn nav_and_profile_stay_inside_role_section() {
    for role in Role::ALL {
        let home = role.home_route();
        assert!(role.profile_route().starts_with(home));
        assert_eq!(role.nav_items()[0].path, home);
        assert!(role.nav_items().iter().all(|item| item.path.starts_with(home)));
    }
}

#[test]
fn only_customers_and_owners_self_register() {
    assert!(Role::Customer.is_self_registrable());
    assert!(Role::FieldOwner.is_self_registrable());
    assert!(!Role::Admin.is_self_registrable());
    assert!(!Role::Staff.is_self_registrable());
}
