use super::*;

#[test]
fn resolves_static_paths() {
    assert_eq!(resolve("/").unwrap().route, AppRoute::Home);
    assert_eq!(resolve("/admin").unwrap().route, AppRoute::AdminDashboard);
    assert_eq!(resolve("/owner/staff/").unwrap().route, AppRoute::OwnerStaff);
    assert_eq!(resolve("/email-verification").unwrap().route, AppRoute::EmailVerification);
}

#[test]
fn captures_params() {
    let matched = resolve("/owner/fields/9/subfields").unwrap();
    assert_eq!(matched.route, AppRoute::OwnerSubFields);
    assert_eq!(matched.param("fieldId"), Some("9"));
    assert_eq!(matched.param("other"), None);

    let matched = resolve("/staff/update-schedule/abc").unwrap();
    assert_eq!(matched.route, AppRoute::StaffUpdateSchedule);
    assert_eq!(matched.param("scheduleId"), Some("abc"));
}

#[test]
fn ignores_query_and_fragment() {
    assert_eq!(resolve("/customer/bookings?status=paid").unwrap().route, AppRoute::CustomerBookings);
    assert_eq!(resolve("/about#team").unwrap().route, AppRoute::About);
}

#[test]
fn unknown_paths_do_not_resolve() {
    assert!(resolve("/admin/unknown").is_none());
    assert!(resolve("/field").is_none());
    assert!(resolve("/owner/fields/9/subfields/1").is_none());
}

#[test]
fn patterns_are_unique_and_resolve_to_themselves() {
    for route in AppRoute::ALL {
        let params: Vec<(&str, &str)> = route
            .pattern()
            .split('/')
            .filter_map(|segment| segment.strip_prefix(':'))
            .map(|name| (name, "x1"))
            .collect();
        let path = route.path_with(&params).unwrap();
        assert_eq!(resolve(&path).unwrap().route, route, "{path}");
    }
}

#[test]
fn path_with_requires_every_param() {
    assert_eq!(AppRoute::FieldDetails.path_with(&[("fieldId", "7")]).as_deref(), Some("/field/7"));
    assert_eq!(AppRoute::FieldDetails.path_with(&[]), None);
    assert_eq!(AppRoute::Home.path_with(&[]).as_deref(), Some("/"));
    assert_eq!(AppRoute::StaffProfile.path_with(&[]).as_deref(), Some("/staff/profile"));
}

#[test]
fn protected_routes_have_allow_lists() {
    for route in AppRoute::ALL {
        match route.access() {
            Access::Protected(allowed) => assert!(!allowed.is_empty(), "{route:?}"),
            Access::Public | Access::Landing | Access::GuestOnly => assert!(route.allowed_roles().is_empty()),
        }
    }
}

#[test]
fn role_sections_map_to_their_role() {
    for role in Role::ALL {
        let home = resolve(role.home_route()).unwrap();
        assert_eq!(home.route.allowed_roles(), &[role]);
        let profile = resolve(role.profile_route()).unwrap();
        assert_eq!(profile.route.allowed_roles(), &[role]);
    }
}

#[test]
fn auth_pages_are_guest_only() {
    assert_eq!(AppRoute::Login.access(), Access::GuestOnly);
    assert_eq!(AppRoute::Register.access(), Access::GuestOnly);
    assert_eq!(AppRoute::Login.pattern(), crate::role::LOGIN_ROUTE);
}

#[test]
fn query_values_are_percent_encoded() {
    let path = with_query("/email-verification", &[("email", "alice+tag@example.com")]);
    assert_eq!(path, "/email-verification?email=alice%2Btag%40example.com");
    assert_eq!(resolve(&path).unwrap().route, AppRoute::EmailVerification);

    let path = with_query("/fields", &[("q", "san bong"), ("page", "2")]);
    assert_eq!(path, "/fields?q=san%20bong&page=2");
    assert_eq!(with_query("/about", &[]), "/about");
}

#[test]
fn root_is_the_landing_route() {
    assert_eq!(AppRoute::Home.access(), Access::Landing);
    assert_eq!(resolve("/").unwrap().route.pattern(), crate::role::PUBLIC_HOME_ROUTE);
}
