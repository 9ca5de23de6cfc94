//! Role dashboards and the per-role section pages.
//!
//! These render inside the authenticated shell. Feature screens (bookings,
//! fields, approvals) are placeholders; only navigation and identity are live.

use fieldbook::Role;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::AuthContext;

#[component]
pub fn RoleDashboard(role: Role) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let greeting = move || auth.session.get().map(|s| format!("Welcome, {}", s.display_name));
    let shortcuts = role
        .nav_items()
        .iter()
        .skip(1)
        .map(|item| view! { <li class="dashboard__shortcut"><A href=item.path>{item.label}</A></li> })
        .collect_view();

    view! {
        <section class="dashboard">
            <h1>{format!("{} dashboard", role.display_name())}</h1>
            <p class="dashboard__greeting">{greeting}</p>
            <ul class="dashboard__shortcuts">{shortcuts}</ul>
        </section>
    }
}

/// Placeholder for a role section.
#[component]
pub fn SectionPage(title: &'static str) -> impl IntoView {
    view! {
        <section class="section-page">
            <h1>{title}</h1>
            <p class="section-page__empty">"Nothing here yet."</p>
        </section>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let row = |label: &'static str, value: Option<String>| {
        view! {
            <tr>
                <th>{label}</th>
                <td>{value.unwrap_or_else(|| "-".to_owned())}</td>
            </tr>
        }
    };

    view! {
        <section class="profile">
            <h1>"Profile"</h1>
            {move || {
                auth.session.get().map(|s| {
                    view! {
                        <table class="profile__details">
                            {row("Name", Some(s.display_name.clone()))}
                            {row("Username", s.unique_name.clone())}
                            {row("User ID", Some(s.subject_id.clone()))}
                            {row("Role", s.role.map(|r| r.display_name().to_owned()))}
                            {row("Session expires", Some(s.expires_at.to_string()))}
                        </table>
                    }
                })
            }}
        </section>
    }
}
