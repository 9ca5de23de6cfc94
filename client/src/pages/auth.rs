//! Login, registration and email verification pages.
//!
//! Each form validates through the session store, which rejects bad input
//! before anything is sent, and shows the store's error text verbatim.

use fieldbook::forms::RegistrationForm;
use fieldbook::net::types::Gender;
use fieldbook::Role;
use fieldbook::role::{LOGIN_ROUTE, landing_route, landing_route_for_label};
use fieldbook::routes::{self, AppRoute};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::form_field::FormField;
use crate::state::session::AuthContext;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        info.set(String::new());
        let store = auth.store();
        let navigate = navigate.clone();
        let (user, pass) = (username.get(), password.get());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match store.login(&user, &pass).await {
                Ok(summary) => {
                    let target = match store.current().and_then(|s| s.role) {
                        Some(role) => landing_route(Some(role)),
                        None => landing_route_for_label(summary.role.as_deref()),
                    };
                    navigate(target, NavigateOptions::default());
                }
                Err(e) => info.set(e.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (store, navigate, user, pass);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Sign in"</h1>
                <FormField label="Username" value=username/>
                <FormField label="Password" value=password kind="password"/>
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">"No account? " <A href="/register">"Register"</A></p>
            </form>
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let birth_date = RwSignal::new(String::new());
    let gender = RwSignal::new(None::<Gender>);
    let role = RwSignal::new(Role::Customer);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = RegistrationForm {
            username: username.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
            full_name: full_name.get(),
            phone_number: phone_number.get(),
            birth_date: birth_date.get(),
            gender: gender.get(),
            role: role.get(),
        };
        busy.set(true);
        info.set(String::new());
        let store = auth.store();
        let navigate = navigate.clone();

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match store.register(&form).await {
                Ok(()) => {
                    let path = AppRoute::EmailVerification.path_with(&[]).unwrap_or_default();
                    let target = routes::with_query(&path, &[("email", form.email.trim())]);
                    navigate(&target, NavigateOptions::default());
                }
                Err(e) => info.set(e.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (store, navigate, form);
            busy.set(false);
        }
    };

    let gender_options = Gender::ALL
        .into_iter()
        .map(|g| view! { <option value=g.label()>{g.display_name()}</option> })
        .collect_view();
    let role_options = Role::ALL
        .into_iter()
        .filter(|r| r.is_self_registrable())
        .map(|r| view! { <option value=r.label() selected=move || role.get() == r>{r.display_name()}</option> })
        .collect_view();

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Create account"</h1>
                <FormField label="Username" value=username/>
                <FormField label="Email" value=email kind="email"/>
                <FormField label="Password" value=password kind="password"/>
                <FormField label="Confirm password" value=confirm_password kind="password"/>
                <FormField label="Full name" value=full_name/>
                <FormField label="Phone number" value=phone_number kind="tel"/>
                <FormField label="Date of birth" value=birth_date kind="date"/>
                <label class="form-field">
                    <span class="form-field__label">"Gender"</span>
                    <select
                        class="form-field__input"
                        on:change=move |ev| gender.set(Gender::from_label(&event_target_value(&ev)))
                    >
                        <option value="" selected=move || gender.get().is_none()>"Select..."</option>
                        {gender_options}
                    </select>
                </label>
                <label class="form-field">
                    <span class="form-field__label">"Account type"</span>
                    <select
                        class="form-field__input"
                        on:change=move |ev| {
                            if let Some(r) = Role::from_label(&event_target_value(&ev)) {
                                role.set(r);
                            }
                        }
                    >
                        {role_options}
                    </select>
                </label>
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Registering..." } else { "Register" }}
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">"Already registered? " <A href=LOGIN_ROUTE>"Sign in"</A></p>
            </form>
        </div>
    }
}

#[component]
pub fn EmailVerificationPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();
    let query = use_query_map();
    let email = RwSignal::new(query.with_untracked(|q| q.get("email")).unwrap_or_default());
    let code = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let verified = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        info.set(String::new());
        let store = auth.store();
        let (email_value, code_value) = (email.get(), code.get());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match store.verify_email(&email_value, &code_value).await {
                Ok(()) => {
                    verified.set(true);
                    info.set("Email verified. You can sign in now.".to_owned());
                }
                Err(e) => info.set(e.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (store, email_value, code_value, verified);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Verify your email"</h1>
                <FormField label="Email" value=email kind="email"/>
                <FormField label="Verification code" value=code placeholder="123456"/>
                <button class="auth-button" type="submit" disabled=move || busy.get() || verified.get()>
                    "Verify"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message" class:auth-message--error=move || !verified.get()>
                        {move || info.get()}
                    </p>
                </Show>
                <Show when=move || verified.get()>
                    <button
                        class="auth-button"
                        type="button"
                        on:click={
                            let navigate = navigate.clone();
                            move |_| navigate(LOGIN_ROUTE, NavigateOptions::default())
                        }
                    >
                        "Go to sign in"
                    </button>
                </Show>
            </form>
        </div>
    }
}
