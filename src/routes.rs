//! The client's route table.
//!
//! DESIGN
//! ======
//! One closed enum lists every route with its path pattern and access policy.
//! Protected routes always carry an explicit allow-list; there is no
//! "authenticated, any role" shortcut.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::guard::Access;
use crate::role::Role;

const ADMIN_ONLY: &[Role] = &[Role::Admin];
const OWNER_ONLY: &[Role] = &[Role::FieldOwner];
const STAFF_ONLY: &[Role] = &[Role::Staff];
const CUSTOMER_ONLY: &[Role] = &[Role::Customer];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    About,
    Fields,
    FieldDetails,
    Login,
    Register,
    EmailVerification,

    AdminDashboard,
    AdminUsers,
    AdminApprovals,
    AdminProfile,

    OwnerDashboard,
    OwnerFields,
    OwnerFieldEdit,
    OwnerSubFields,
    OwnerStaff,
    OwnerProfile,

    StaffDashboard,
    StaffFields,
    StaffFieldDetail,
    StaffUpdateSchedule,
    StaffManageBookings,
    StaffConfirmPayment,
    StaffProfile,
    StaffBookingConfirmation,

    CustomerDashboard,
    CustomerBookings,
    CustomerBookingConfirmation,
    CustomerFieldDetail,
    CustomerProfile,
}

impl AppRoute {
    pub const ALL: [Self; 30] = [
        Self::Home,
        Self::About,
        Self::Fields,
        Self::FieldDetails,
        Self::Login,
        Self::Register,
        Self::EmailVerification,
        Self::AdminDashboard,
        Self::AdminUsers,
        Self::AdminApprovals,
        Self::AdminProfile,
        Self::OwnerDashboard,
        Self::OwnerFields,
        Self::OwnerFieldEdit,
        Self::OwnerSubFields,
        Self::OwnerStaff,
        Self::OwnerProfile,
        Self::StaffDashboard,
        Self::StaffFields,
        Self::StaffFieldDetail,
        Self::StaffUpdateSchedule,
        Self::StaffManageBookings,
        Self::StaffConfirmPayment,
        Self::StaffProfile,
        Self::StaffBookingConfirmation,
        Self::CustomerDashboard,
        Self::CustomerBookings,
        Self::CustomerBookingConfirmation,
        Self::CustomerFieldDetail,
        Self::CustomerProfile,
    ];

    /// Path pattern; `:name` segments capture one path segment.
    #[must_use]
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Fields => "/fields",
            Self::FieldDetails => "/field/:fieldId",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::EmailVerification => "/email-verification",
            Self::AdminDashboard => "/admin",
            Self::AdminUsers => "/admin/users",
            Self::AdminApprovals => "/admin/approvals",
            Self::AdminProfile => "/admin/profile",
            Self::OwnerDashboard => "/owner",
            Self::OwnerFields => "/owner/fields",
            Self::OwnerFieldEdit => "/owner/field/:fieldId",
            Self::OwnerSubFields => "/owner/fields/:fieldId/subfields",
            Self::OwnerStaff => "/owner/staff",
            Self::OwnerProfile => "/owner/profile",
            Self::StaffDashboard => "/staff",
            Self::StaffFields => "/staff/fields",
            Self::StaffFieldDetail => "/staff/fields/:fieldId",
            Self::StaffUpdateSchedule => "/staff/update-schedule/:scheduleId",
            Self::StaffManageBookings => "/staff/manage-bookings",
            Self::StaffConfirmPayment => "/staff/confirm-payment",
            Self::StaffProfile => "/staff/profile",
            Self::StaffBookingConfirmation => "/staff/booking-confirmation",
            Self::CustomerDashboard => "/customer",
            Self::CustomerBookings => "/customer/bookings",
            Self::CustomerBookingConfirmation => "/customer/booking-confirmation",
            Self::CustomerFieldDetail => "/customer/fields/:fieldId",
            Self::CustomerProfile => "/customer/profile",
        }
    }

    #[must_use]
    pub fn access(self) -> Access {
        match self {
            Self::Home => Access::Landing,
            Self::About | Self::Fields | Self::FieldDetails | Self::EmailVerification => Access::Public,
            Self::Login | Self::Register => Access::GuestOnly,
            Self::AdminDashboard | Self::AdminUsers | Self::AdminApprovals | Self::AdminProfile => {
                Access::Protected(ADMIN_ONLY)
            }
            Self::OwnerDashboard
            | Self::OwnerFields
            | Self::OwnerFieldEdit
            | Self::OwnerSubFields
            | Self::OwnerStaff
            | Self::OwnerProfile => Access::Protected(OWNER_ONLY),
            Self::StaffDashboard
            | Self::StaffFields
            | Self::StaffFieldDetail
            | Self::StaffUpdateSchedule
            | Self::StaffManageBookings
            | Self::StaffConfirmPayment
            | Self::StaffProfile
            | Self::StaffBookingConfirmation => Access::Protected(STAFF_ONLY),
            Self::CustomerDashboard
            | Self::CustomerBookings
            | Self::CustomerBookingConfirmation
            | Self::CustomerFieldDetail
            | Self::CustomerProfile => Access::Protected(CUSTOMER_ONLY),
        }
    }

    /// Allow-list of a protected route; empty for public and guest-only routes.
    #[must_use]
    pub fn allowed_roles(self) -> &'static [Role] {
        match self.access() {
            Access::Protected(allowed) => allowed,
            Access::Public | Access::Landing | Access::GuestOnly => &[],
        }
    }

    /// Concrete path with `params` substituted, e.g. `("fieldId", "7")`.
    ///
    /// Returns `None` if a parameter of the pattern is missing.
    #[must_use]
    pub fn path_with(self, params: &[(&str, &str)]) -> Option<String> {
        let pattern = self.pattern();
        if pattern == "/" {
            return Some(pattern.to_owned());
        }
        let mut out = String::new();
        for segment in segments(pattern) {
            out.push('/');
            match segment.strip_prefix(':') {
                Some(name) => out.push_str(params.iter().find(|(key, _)| *key == name)?.1),
                None => out.push_str(segment),
            }
        }
        Some(out)
    }
}

/// Append `query` to `path`, percent-encoding keys and values.
#[must_use]
pub fn with_query(path: &str, query: &[(&str, &str)]) -> String {
    let mut out = path.to_owned();
    for (i, (key, value)) in query.iter().enumerate() {
        out.push(if i == 0 { '?' } else { '&' });
        out.push_str(&urlencoding::encode(key));
        out.push('=');
        out.push_str(&urlencoding::encode(value));
    }
    out
}

/// A resolved route plus its captured `:param` values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: AppRoute,
    pub params: Vec<(&'static str, String)>,
}

impl RouteMatch {
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.iter().find(|(key, _)| *key == name).map(|(_, value)| value.as_str())
    }
}

/// Resolve a browser path (query and fragment ignored) against the table.
#[must_use]
pub fn resolve(path: &str) -> Option<RouteMatch> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let wanted: Vec<&str> = segments(path).collect();
    AppRoute::ALL.into_iter().find_map(|route| match_pattern(route, &wanted))
}

fn match_pattern(route: AppRoute, wanted: &[&str]) -> Option<RouteMatch> {
    let pattern: Vec<&'static str> = segments(route.pattern()).collect();
    if pattern.len() != wanted.len() {
        return None;
    }
    let mut params = Vec::new();
    for (expected, actual) in pattern.into_iter().zip(wanted) {
        match expected.strip_prefix(':') {
            Some(name) => params.push((name, (*actual).to_owned())),
            None if expected == *actual => {}
            None => return None,
        }
    }
    Some(RouteMatch { route, params })
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}
