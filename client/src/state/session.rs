//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The core [`SessionStore`] is the source of truth. [`AuthContext`] mirrors
//! its session into a signal so guards and views re-render on login and
//! logout, and re-hydrates when another tab changes the persisted token.

use std::sync::Arc;

use fieldbook::session::TOKEN_STORAGE_KEY;
use fieldbook::{ApiConfig, HttpClient, Session, SessionStore};
use leptos::prelude::*;

use crate::net::storage::LocalStorage;
use crate::net::transport::BrowserTransport;

/// Session handle plus a signal mirroring its current session.
#[derive(Clone, Copy)]
pub struct AuthContext {
    store: StoredValue<SessionStore>,
    pub session: RwSignal<Option<Session>>,
}

impl AuthContext {
    /// Build the store over `localStorage` and `fetch`, hydrate it, and
    /// provide the context to the component tree.
    pub fn install() -> Self {
        let http = HttpClient::new(&api_config(), Arc::new(BrowserTransport), Arc::new(LocalStorage));
        let store = SessionStore::new(http);
        let session = RwSignal::new(None);
        store.subscribe(move |next| session.set(next.cloned()));
        store.hydrate();

        let ctx = Self { store: StoredValue::new(store), session };
        ctx.watch_other_tabs();
        provide_context(ctx);
        ctx
    }

    pub fn store(&self) -> SessionStore {
        self.store.get_value()
    }

    pub fn logout(&self) {
        self.store.with_value(SessionStore::logout);
    }

    #[cfg(feature = "csr")]
    fn watch_other_tabs(self) {
        let handle = window_event_listener(leptos::ev::storage, move |ev: web_sys::StorageEvent| {
            // `None` key means the whole storage was cleared.
            if ev.key().is_none_or(|key| key == TOKEN_STORAGE_KEY) {
                self.store.with_value(|store| {
                    store.hydrate();
                });
            }
        });
        on_cleanup(move || handle.remove());
    }

    #[cfg(not(feature = "csr"))]
    fn watch_other_tabs(self) {
        let _ = TOKEN_STORAGE_KEY;
    }
}

/// Backend configuration baked in at compile time.
fn api_config() -> ApiConfig {
    match option_env!("FIELDBOOK_API_URL") {
        Some(raw) => match ApiConfig::with_base_url(raw) {
            Ok(config) => config,
            Err(e) => {
                #[cfg(feature = "csr")]
                log::warn!("invalid FIELDBOOK_API_URL {raw:?} ({e}); using default");
                #[cfg(not(feature = "csr"))]
                let _ = e;
                ApiConfig::default()
            }
        },
        None => ApiConfig::default(),
    }
}
