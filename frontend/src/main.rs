use gloo::events::EventListener;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

mod components;
mod config;
mod context;
mod hooks;
mod pages;
mod services;

use components::{Header, LoginModal, ToastView};
use config::AppConfig;
use context::{AppContext, Page};
use hooks::use_booking::{use_booking_state, BookingAction};
use hooks::use_modal::use_modal;
use hooks::use_session::use_session;
use hooks::use_toast::use_toast;
use pages::booking::BookingPage;
use pages::checkout::CheckoutPage;
use pages::facilities::FacilitiesPage;
use pages::home::HomePage;
use pages::my_reservations::MyReservationsPage;
use pages::profile::ProfilePage;
use pages::register::RegisterPage;
use pages::rooms::RoomsPage;
use services::api::ApiClient;
use services::logging::Logger;

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| AppConfig::from_build_env());
    let api = ApiClient::with_base_url(config.api_base_url.clone());
    let booking = use_booking_state(config.today());
    let session = use_session(&api);
    let toast = use_toast(config.toast_duration_ms);
    let modals = use_modal();
    let page = use_state(Page::current);

    // Back/forward buttons change the hash without going through `navigate`
    {
        let page = page.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "hashchange", move |_| page.set(Page::current()))
            });
            move || drop(listener)
        });
    }

    // A server-side logout wipes session storage, so the booking state is re-read
    use_effect_with(session.is_logged_in(), {
        let booking = booking.clone();
        move |logged_in| {
            if !*logged_in {
                booking.dispatch(BookingAction::Reload);
            }
            || ()
        }
    });

    let navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| {
            Logger::debug_with_component("app", &format!("navigating to {:?}", next));
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_hash(next.hash()) {
                    Logger::warn_with_component("app", &format!("could not update location hash: {:?}", e));
                }
            }
            scroll_to_top();
            page.set(next);
        })
    };

    let ctx = AppContext {
        config: config.clone(),
        api,
        booking,
        session,
        notifier: toast.notifier.clone(),
        modals,
        navigate,
    };

    let content = match *page {
        Page::Home => html! { <HomePage ctx={ctx.clone()} /> },
        Page::Rooms => html! { <RoomsPage ctx={ctx.clone()} /> },
        Page::Facilities => html! { <FacilitiesPage ctx={ctx.clone()} /> },
        Page::Booking => html! { <BookingPage ctx={ctx.clone()} /> },
        Page::Checkout => html! { <CheckoutPage ctx={ctx.clone()} /> },
        Page::Register => html! { <RegisterPage ctx={ctx.clone()} /> },
        Page::Profile => html! { <ProfilePage ctx={ctx.clone()} /> },
        Page::Reservations => html! { <MyReservationsPage ctx={ctx.clone()} /> },
    };

    html! {
        <>
            <Header ctx={ctx.clone()} current_page={*page} />
            <main class="main">
                {content}
            </main>
            <LoginModal ctx={ctx.clone()} />
            <ToastView toast={toast.current.clone()} on_dismiss={toast.dismiss.clone()} />
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("hotel booking frontend starting");
    yew::Renderer::<App>::new().render();
}
