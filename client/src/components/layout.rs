//! Authenticated layout shell: header, role navigation, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only protected routes mount inside this shell, so a session is normally
//! present. When logout clears it, the enclosing guard redirects on the same
//! update and the shell renders nothing in between.

use fieldbook::role::LOGIN_ROUTE;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::AuthContext;

#[component]
pub fn MainLayout(children: Children) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        auth.logout();
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    let role = move || auth.session.get().and_then(|s| s.role);
    let nav = move || {
        role().map(|role| {
            role.nav_items()
                .iter()
                .map(|item| view! { <li><A href=item.path>{item.label}</A></li> })
                .collect_view()
        })
    };

    view! {
        <div class="layout">
            <header class="layout__header">
                <A href="/">"Fieldbook"</A>
                <span class="layout__user">
                    {move || auth.session.get().map(|s| s.display_name).unwrap_or_default()}
                    " "
                    <span class="layout__role">{move || role().map(|r| r.display_name())}</span>
                </span>
                {move || role().map(|r| view! { <A href=r.profile_route()>"Profile"</A> })}
                <button class="layout__logout" on:click=on_logout>"Log out"</button>
            </header>
            <nav class="layout__nav">
                <ul>{nav}</ul>
            </nav>
            <main class="layout__content">{children()}</main>
        </div>
    }
}
