use booking_shared::{AuthResponse, GuestSession};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::session_storage::BrowserSessionStore;

/// Logged-in guest, backed by session storage
#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    state: UseStateHandle<GuestSession>,
}

impl SessionHandle {
    pub fn session(&self) -> &GuestSession {
        &self.state
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.is_logged_in
    }

    pub fn guest_id(&self) -> Option<i64> {
        self.state.guest_id.filter(|_| self.state.is_logged_in)
    }

    pub fn login(&self, auth: &AuthResponse) {
        self.state.set(GuestSession::login(&BrowserSessionStore, auth));
    }

    pub fn logout(&self) {
        self.state.set(GuestSession::logout(&BrowserSessionStore));
    }

    pub fn rename(&self, names: &str, surnames: &str) {
        let mut session = (*self.state).clone();
        session.rename(&BrowserSessionStore, names, surnames);
        self.state.set(session);
    }
}

/// Guest session loaded from storage, then checked against the server once
#[hook]
pub fn use_session(api_client: &ApiClient) -> SessionHandle {
    let state = use_state(|| GuestSession::load(&BrowserSessionStore));

    {
        let state = state.clone();
        let api_client = api_client.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api_client.check_auth().await {
                    Ok(check) => {
                        let session = GuestSession::sync_from_check(&BrowserSessionStore, &check);
                        Logger::debug_with_component(
                            "session",
                            &format!("server session check: logged in = {}", session.is_logged_in),
                        );
                        state.set(session);
                    }
                    Err(e) => Logger::warn_with_component(
                        "session",
                        &format!("session check failed, keeping local state: {}", e),
                    ),
                }
            });
            || ()
        });
    }

    SessionHandle { state }
}
