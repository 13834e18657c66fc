use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::context::{AppContext, Page};
use crate::hooks::use_modal::ModalKind;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub ctx: AppContext,
    pub current_page: Page,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let ctx = &props.ctx;
    let session = ctx.session.session();

    let nav_link = |page: Page, label: &'static str| {
        let ctx = ctx.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            ctx.modals.close();
            ctx.go(page);
        });
        let active = (props.current_page == page).then_some("active");
        html! {
            <a class={classes!("nav-link", active)} href={page.hash()} {onclick}>{label}</a>
        }
    };

    let on_login_click = {
        let modals = ctx.modals.clone();
        Callback::from(move |_: MouseEvent| modals.toggle(ModalKind::Login))
    };

    let on_badge_click = {
        let modals = ctx.modals.clone();
        Callback::from(move |_: MouseEvent| modals.toggle(ModalKind::ProfileMenu))
    };

    let on_logout = {
        let ctx = ctx.clone();
        Callback::from(move |_: MouseEvent| {
            let ctx = ctx.clone();
            spawn_local(async move {
                if let Err(e) = ctx.api.logout().await {
                    Logger::warn_with_component("header", &format!("server logout failed: {}", e));
                }
                ctx.session.logout();
                ctx.modals.close();
                ctx.notifier.info("Sesión cerrada correctamente.");
                ctx.go(Page::Home);
            });
        })
    };

    let profile_menu = if ctx.modals.is_open(ModalKind::ProfileMenu) {
        html! {
            <div class="profile-menu">
                <div class="profile-menu-name">
                    {session.guest_name.clone().unwrap_or_default()}
                </div>
                {nav_link(Page::Profile, "Mi perfil")}
                {nav_link(Page::Reservations, "Mis reservas")}
                <button type="button" class="profile-menu-logout" onclick={on_logout}>
                    {"Cerrar sesión"}
                </button>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <header class="header">
            <div class="container">
                <a class="brand" href={Page::Home.hash()}>{"Hotel"}</a>
                <nav class="nav-links">
                    {nav_link(Page::Home, "Inicio")}
                    {nav_link(Page::Rooms, "Habitaciones")}
                    {nav_link(Page::Facilities, "Instalaciones")}
                    {nav_link(Page::Booking, "Reservar")}
                </nav>
                <div class="header-right">
                    if session.is_logged_in {
                        <button type="button" class="profile-badge" onclick={on_badge_click}>
                            {session.initials()}
                        </button>
                        {profile_menu}
                    } else {
                        <button type="button" class="btn btn-outline" onclick={on_login_click}>
                            {"INICIAR SESIÓN"}
                        </button>
                    }
                </div>
            </div>
        </header>
    }
}
