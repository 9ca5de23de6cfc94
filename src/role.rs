//! Closed role set and the role → route tables.
//!
//! DESIGN
//! ======
//! Every per-role lookup (landing route, profile route, navigation menu) is an
//! exhaustive `match` on [`Role`], so adding a role fails to compile until each
//! table has an entry. The backend speaks display-language labels
//! (`CHỦ SÂN`, ...); those appear only in [`Role::label`] and
//! [`Role::from_label`].

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Public landing page for visitors and sessions without a usable role.
pub const PUBLIC_HOME_ROUTE: &str = "/";
/// Sign-in page.
pub const LOGIN_ROUTE: &str = "/login";

/// Permission class carried in the session token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "CHỦ SÂN")]
    FieldOwner,
    #[serde(rename = "NHÂN VIÊN")]
    Staff,
    #[serde(rename = "KHÁCH HÀNG")]
    Customer,
}

/// One entry in the authenticated layout's side menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

const ADMIN_NAV: &[NavItem] = &[
    NavItem { label: "Dashboard", path: "/admin" },
    NavItem { label: "User Management", path: "/admin/users" },
    NavItem { label: "Field Approvals", path: "/admin/approvals" },
];

const OWNER_NAV: &[NavItem] = &[
    NavItem { label: "Dashboard", path: "/owner" },
    NavItem { label: "My Fields", path: "/owner/fields" },
    NavItem { label: "Staff Management", path: "/owner/staff" },
];

const STAFF_NAV: &[NavItem] = &[
    NavItem { label: "Dashboard", path: "/staff" },
    NavItem { label: "Manage Bookings", path: "/staff/manage-bookings" },
    NavItem { label: "Confirm Payment", path: "/staff/confirm-payment" },
];

const CUSTOMER_NAV: &[NavItem] = &[
    NavItem { label: "Dashboard", path: "/customer" },
    NavItem { label: "My Bookings", path: "/customer/bookings" },
];

impl Role {
    pub const ALL: [Self; 4] = [Self::Admin, Self::FieldOwner, Self::Staff, Self::Customer];

    /// Label used by the backend in tokens and registration payloads.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::FieldOwner => "CHỦ SÂN",
            Self::Staff => "NHÂN VIÊN",
            Self::Customer => "KHÁCH HÀNG",
        }
    }

    /// Parse a backend label. Surrounding whitespace and letter case are ignored.
    #[must_use]
    pub fn from_label(raw: &str) -> Option<Self> {
        let wanted = raw.trim().to_uppercase();
        Self::ALL.into_iter().find(|role| role.label() == wanted)
    }

    /// English name for UI chrome.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::FieldOwner => "Field Owner",
            Self::Staff => "Staff",
            Self::Customer => "Customer",
        }
    }

    /// Default route after sign-in.
    #[must_use]
    pub fn home_route(self) -> &'static str {
        match self {
            Self::Admin => "/admin",
            Self::FieldOwner => "/owner",
            Self::Staff => "/staff",
            Self::Customer => "/customer",
        }
    }

    #[must_use]
    pub fn profile_route(self) -> &'static str {
        match self {
            Self::Admin => "/admin/profile",
            Self::FieldOwner => "/owner/profile",
            Self::Staff => "/staff/profile",
            Self::Customer => "/customer/profile",
        }
    }

    #[must_use]
    pub fn nav_items(self) -> &'static [NavItem] {
        match self {
            Self::Admin => ADMIN_NAV,
            Self::FieldOwner => OWNER_NAV,
            Self::Staff => STAFF_NAV,
            Self::Customer => CUSTOMER_NAV,
        }
    }

    /// Whether the public sign-up form may request this role.
    #[must_use]
    pub fn is_self_registrable(self) -> bool {
        matches!(self, Self::Customer | Self::FieldOwner)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Landing route for an optional role; absent roles land on the public home.
#[must_use]
pub fn landing_route(role: Option<Role>) -> &'static str {
    role.map_or(PUBLIC_HOME_ROUTE, Role::home_route)
}

/// Landing route for a raw backend label; unrecognized labels land on the
/// public home.
#[must_use]
pub fn landing_route_for_label(label: Option<&str>) -> &'static str {
    landing_route(label.and_then(Role::from_label))
}
