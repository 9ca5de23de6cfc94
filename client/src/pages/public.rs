//! Public pages reachable with or without a session.
//!
//! Signed-in users with a role never see [`HomePage`]: the root route sends
//! them on to their home.

use fieldbook::role::LOGIN_ROUTE;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::state::session::AuthContext;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();

    view! {
        <section class="home">
            <h1>"Fieldbook"</h1>
            <p>"Find a pitch, pick a slot, and book it in minutes."</p>
            <div class="home__actions">
                <A href="/fields">"Browse fields"</A>
                <Show when=move || auth.session.get().is_none()>
                    <A href=LOGIN_ROUTE>"Sign in"</A>
                    <A href="/register">"Register"</A>
                </Show>
            </div>
        </section>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="about">
            <h1>"About Fieldbook"</h1>
            <p>"Field owners list their pitches, staff run the schedule, and customers book."</p>
        </section>
    }
}

#[component]
pub fn FieldsPage() -> impl IntoView {
    view! {
        <section class="fields">
            <h1>"Fields"</h1>
            <p>"Field listings appear here."</p>
        </section>
    }
}

#[component]
pub fn FieldDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let field_id = move || params.with(|p| p.get("fieldId")).unwrap_or_default();

    view! {
        <section class="field-details">
            <h1>"Field " {field_id}</h1>
            <A href="/fields">"Back to fields"</A>
        </section>
    }
}
