use std::rc::Rc;

use yew::prelude::*;

use crate::config::AppConfig;
use crate::hooks::use_booking::BookingHandle;
use crate::hooks::use_modal::ModalHandle;
use crate::hooks::use_session::SessionHandle;
use crate::hooks::use_toast::Notifier;
use crate::services::api::ApiClient;

/// Top-level views, addressed through the URL hash so a reload stays on the same page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Rooms,
    Facilities,
    Booking,
    Checkout,
    Register,
    Profile,
    Reservations,
}

impl Page {
    pub fn hash(self) -> &'static str {
        match self {
            Page::Home => "#inicio",
            Page::Rooms => "#habitaciones",
            Page::Facilities => "#instalaciones",
            Page::Booking => "#reservar",
            Page::Checkout => "#checkout",
            Page::Register => "#registro",
            Page::Profile => "#perfil",
            Page::Reservations => "#mis-reservas",
        }
    }

    /// Unknown hashes land on the home page
    pub fn from_hash(hash: &str) -> Self {
        [
            Page::Rooms,
            Page::Facilities,
            Page::Booking,
            Page::Checkout,
            Page::Register,
            Page::Profile,
            Page::Reservations,
        ]
        .into_iter()
        .find(|page| page.hash() == hash)
        .unwrap_or(Page::Home)
    }

    /// Page named by the current location hash
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|window| window.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }
}

/// Everything a page needs from the app shell
#[derive(Clone, PartialEq)]
pub struct AppContext {
    pub config: Rc<AppConfig>,
    pub api: ApiClient,
    pub booking: BookingHandle,
    pub session: SessionHandle,
    pub notifier: Notifier,
    pub modals: ModalHandle,
    pub navigate: Callback<Page>,
}

impl AppContext {
    pub fn go(&self, page: Page) {
        self.navigate.emit(page);
    }
}

/// Full page reload, used after the profile changes
pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            log::warn!("page reload failed: {:?}", e);
        }
    }
}
