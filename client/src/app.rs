//! Root application component with routing and the session context.

use fieldbook::Role;
use fieldbook::guard;
use fieldbook::routes::AppRoute;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
};

use crate::components::layout::MainLayout;
use crate::pages::{
    auth::{EmailVerificationPage, LoginPage, RegisterPage},
    dashboard::{ProfilePage, RoleDashboard, SectionPage},
    public::{AboutPage, FieldDetailsPage, FieldsPage, HomePage},
};
use crate::state::session::AuthContext;

/// Root application component.
///
/// Hydrates the session before the router mounts, so the first guard
/// evaluation already sees the persisted login.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    AuthContext::install();

    view! {
        <Title text="Fieldbook"/>

        <Router>
            <Routes fallback=|| view! { <Fallback/> }>
                <Route path=StaticSegment("") view=|| view! { <Guarded route=AppRoute::Home><HomePage/></Guarded> }/>
                <Route path=StaticSegment("about") view=|| view! { <Guarded route=AppRoute::About><AboutPage/></Guarded> }/>
                <Route path=StaticSegment("fields") view=|| view! { <Guarded route=AppRoute::Fields><FieldsPage/></Guarded> }/>
                <Route
                    path=(StaticSegment("field"), ParamSegment("fieldId"))
                    view=|| view! { <Guarded route=AppRoute::FieldDetails><FieldDetailsPage/></Guarded> }
                />
                <Route path=StaticSegment("login") view=|| view! { <Guarded route=AppRoute::Login><LoginPage/></Guarded> }/>
                <Route
                    path=StaticSegment("register")
                    view=|| view! { <Guarded route=AppRoute::Register><RegisterPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("email-verification")
                    view=|| view! { <Guarded route=AppRoute::EmailVerification><EmailVerificationPage/></Guarded> }
                />

                // Admin
                <Route path=StaticSegment("admin") view=|| role_home(AppRoute::AdminDashboard, Role::Admin)/>
                <Route path=(StaticSegment("admin"), StaticSegment("users")) view=|| section(AppRoute::AdminUsers, "User Management")/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("approvals"))
                    view=|| section(AppRoute::AdminApprovals, "Field Approvals")
                />
                <Route path=(StaticSegment("admin"), StaticSegment("profile")) view=|| profile(AppRoute::AdminProfile)/>

                // Field owner
                <Route path=StaticSegment("owner") view=|| role_home(AppRoute::OwnerDashboard, Role::FieldOwner)/>
                <Route path=(StaticSegment("owner"), StaticSegment("fields")) view=|| section(AppRoute::OwnerFields, "My Fields")/>
                <Route
                    path=(StaticSegment("owner"), StaticSegment("field"), ParamSegment("fieldId"))
                    view=|| section(AppRoute::OwnerFieldEdit, "Edit Field")
                />
                <Route
                    path=(StaticSegment("owner"), StaticSegment("fields"), ParamSegment("fieldId"), StaticSegment("subfields"))
                    view=|| section(AppRoute::OwnerSubFields, "Sub-fields")
                />
                <Route path=(StaticSegment("owner"), StaticSegment("staff")) view=|| section(AppRoute::OwnerStaff, "Staff")/>
                <Route path=(StaticSegment("owner"), StaticSegment("profile")) view=|| profile(AppRoute::OwnerProfile)/>

                // Staff
                <Route path=StaticSegment("staff") view=|| role_home(AppRoute::StaffDashboard, Role::Staff)/>
                <Route path=(StaticSegment("staff"), StaticSegment("fields")) view=|| section(AppRoute::StaffFields, "Fields")/>
                <Route
                    path=(StaticSegment("staff"), StaticSegment("fields"), ParamSegment("fieldId"))
                    view=|| section(AppRoute::StaffFieldDetail, "Field Detail")
                />
                <Route
                    path=(StaticSegment("staff"), StaticSegment("update-schedule"), ParamSegment("scheduleId"))
                    view=|| section(AppRoute::StaffUpdateSchedule, "Update Schedule")
                />
                <Route
                    path=(StaticSegment("staff"), StaticSegment("manage-bookings"))
                    view=|| section(AppRoute::StaffManageBookings, "Manage Bookings")
                />
                <Route
                    path=(StaticSegment("staff"), StaticSegment("confirm-payment"))
                    view=|| section(AppRoute::StaffConfirmPayment, "Confirm Payment")
                />
                <Route path=(StaticSegment("staff"), StaticSegment("profile")) view=|| profile(AppRoute::StaffProfile)/>
                <Route
                    path=(StaticSegment("staff"), StaticSegment("booking-confirmation"))
                    view=|| section(AppRoute::StaffBookingConfirmation, "Booking Confirmation")
                />

                // Customer
                <Route path=StaticSegment("customer") view=|| role_home(AppRoute::CustomerDashboard, Role::Customer)/>
                <Route
                    path=(StaticSegment("customer"), StaticSegment("bookings"))
                    view=|| section(AppRoute::CustomerBookings, "My Bookings")
                />
                <Route
                    path=(StaticSegment("customer"), StaticSegment("booking-confirmation"))
                    view=|| section(AppRoute::CustomerBookingConfirmation, "Booking Confirmation")
                />
                <Route
                    path=(StaticSegment("customer"), StaticSegment("fields"), ParamSegment("fieldId"))
                    view=|| section(AppRoute::CustomerFieldDetail, "Field Detail")
                />
                <Route path=(StaticSegment("customer"), StaticSegment("profile")) view=|| profile(AppRoute::CustomerProfile)/>
            </Routes>
        </Router>
    }
}

fn role_home(route: AppRoute, role: Role) -> impl IntoView {
    view! { <Guarded route><RoleDashboard role/></Guarded> }
}

fn section(route: AppRoute, title: &'static str) -> impl IntoView {
    view! { <Guarded route><SectionPage title/></Guarded> }
}

fn profile(route: AppRoute) -> impl IntoView {
    view! { <Guarded route><ProfilePage/></Guarded> }
}

/// Re-evaluates `route`'s access policy whenever the session changes.
///
/// Protected views mount inside [`MainLayout`]; every other decision is a
/// redirect.
#[component]
fn Guarded(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    move || {
        let children = children.clone();
        let decision = guard::evaluate_access(auth.session.get().as_ref(), route.access());
        match decision.redirect_target() {
            Some(target) => view! { <Redirect path=target/> }.into_any(),
            None if !route.allowed_roles().is_empty() => {
                view! { <MainLayout>{children()}</MainLayout> }.into_any()
            }
            None => children().into_any(),
        }
    }
}

/// Paths the router did not match, decided against the route table: login
/// when signed out, the role's landing route otherwise.
#[component]
fn Fallback() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let location = use_location();
    move || {
        let session = auth.session.get();
        let decision = guard::decide_path(session.as_ref(), &location.pathname.get());
        let target = decision
            .redirect_target()
            .unwrap_or_else(|| guard::fallback_target(session.as_ref()));
        view! { <Redirect path=target/> }
    }
}
