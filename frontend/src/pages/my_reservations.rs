use booking_shared::{history_cards, ReservationCardView};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::context::{AppContext, Page};
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct MyReservationsPageProps {
    pub ctx: AppContext,
}

#[derive(Clone, PartialEq)]
enum HistoryState {
    Loading,
    Loaded(Vec<ReservationCardView>),
    Failed,
}

#[function_component(MyReservationsPage)]
pub fn my_reservations_page(props: &MyReservationsPageProps) -> Html {
    let ctx = &props.ctx;
    let history = use_state(|| HistoryState::Loading);

    use_effect_with(ctx.session.guest_id(), {
        let ctx = ctx.clone();
        let history = history.clone();
        move |guest_id| {
            match *guest_id {
                None => ctx.go(Page::Booking),
                Some(guest_id) => spawn_local(async move {
                    match ctx.api.get_guest_reservations(guest_id).await {
                        Ok(records) => {
                            Logger::debug_with_component(
                                "reservations",
                                &format!("{} reservations for guest {}", records.len(), guest_id),
                            );
                            history.set(HistoryState::Loaded(history_cards(&records)));
                        }
                        Err(e) => {
                            Logger::error_with_component("reservations", &format!("history not loaded: {}", e));
                            ctx.notifier.error("Error de conexión. No se pudieron cargar las reservas.");
                            history.set(HistoryState::Failed);
                        }
                    }
                }),
            }
            || ()
        }
    });

    let on_book = {
        let ctx = ctx.clone();
        Callback::from(move |_: MouseEvent| ctx.go(Page::Booking))
    };

    let content = match &*history {
        HistoryState::Loading => html! { <p class="reservations-loading">{"Cargando tus reservas..."}</p> },
        HistoryState::Failed => html! {
            <p class="reservations-error">{"No pudimos cargar tus reservas en este momento."}</p>
        },
        HistoryState::Loaded(cards) if cards.is_empty() => html! {
            <div class="reservations-empty">
                <p>{"Aún no tienes reservas con nosotros."}</p>
                <button type="button" class="btn btn-primary" onclick={on_book}>{"RESERVAR AHORA"}</button>
            </div>
        },
        HistoryState::Loaded(cards) => html! {
            <>{for cards.iter().map(reservation_card)}</>
        },
    };

    html! {
        <section class="reservations-page">
            <h2>{"Mis reservas"}</h2>
            <div class="reservations-list">{content}</div>
        </section>
    }
}

fn reservation_card(card: &ReservationCardView) -> Html {
    let detail = |label: &'static str, value: &str| html! {
        <div class="res-detail-group">
            <span class="res-label">{label}</span>
            <span class="res-value">{value.to_string()}</span>
        </div>
    };

    html! {
        <div class="reservation-card" key={card.code.clone()}>
            <div class="res-card-header">
                <span class="res-code">{format!("Reserva: {}", card.code)}</span>
                <span class={classes!("res-status", card.status.css_class())}>{card.status.label()}</span>
            </div>
            <div class="res-card-body">
                {detail("Check-in", &card.check_in_label)}
                {detail("Check-out", &card.check_out_label)}
                {detail("Habitación", &card.room_name)}
                {detail("Huéspedes", &card.guests_label)}
            </div>
            <div class="res-card-footer">
                <div class="res-breakdown-row">
                    <span>{"Costo de Habitación"}</span>
                    <span>{&card.room_subtotal_label}</span>
                </div>
                if let Some(consumption) = &card.consumption_label {
                    <div class="res-breakdown-row">
                        <span>{"Consumos Extra"}</span>
                        <span>{consumption}</span>
                    </div>
                }
                <div class="res-total-row">
                    <span class="res-label">{"TOTAL A PAGAR"}</span>
                    <span class="res-total">{&card.total_label}</span>
                </div>
            </div>
        </div>
    }
}
