use booking_shared::cart::{guests_label, short_date_label};
use booking_shared::{BookingError, RoomCardView};
use chrono::NaiveDate;
use yew::prelude::*;

use crate::components::calendar::DualCalendar;
use crate::components::cart::CartSummary;
use crate::components::guest_selector::GuestSelector;
use crate::components::modal::Modal;
use crate::components::reveal::Reveal;
use crate::components::room_card::RoomCard;
use crate::context::{AppContext, Page};
use crate::hooks::use_availability::use_availability;
use crate::hooks::use_booking::BookingAction;
use crate::hooks::use_modal::ModalKind;

#[derive(Properties, PartialEq)]
pub struct BookingPageProps {
    pub ctx: AppContext,
}

/// A stored stay is searched on load; after that every guest-count or
/// cart change searches, even before both dates are picked
fn should_search(on_load: bool, range_complete: bool) -> bool {
    !on_load || range_complete
}

#[function_component(BookingPage)]
pub fn booking_page(props: &BookingPageProps) -> Html {
    let ctx = &props.ctx;
    let booking = &ctx.booking;
    let controller = &booking.controller;
    let availability = use_availability(&ctx.api, booking, &ctx.notifier);

    let guest_count = controller.guest_count();
    let selected_room_id = controller.selected_room().map(|room| room.id);
    let range_complete = controller.range().is_complete();
    let calendar_open = ctx.modals.is_open(ModalKind::Calendar);

    // Search again whenever the guest count or the cart changes, and on load
    // when a stay was already picked
    let first_search = use_mut_ref(|| true);
    use_effect_with((guest_count, selected_room_id), {
        let search = availability.search.clone();
        move |(guest_count, _)| {
            let on_load = first_search.replace(false);
            if should_search(on_load, range_complete) {
                search.emit(*guest_count);
            }
            || ()
        }
    });

    use_effect_with(calendar_open, {
        let load_unavailable = availability.load_unavailable.clone();
        move |open| {
            if *open {
                load_unavailable.emit(());
            }
            || ()
        }
    });

    use_effect_with(booking.dropped_room.clone(), {
        let notifier = ctx.notifier.clone();
        move |dropped| {
            if let Some(name) = dropped {
                notifier.info(format!(
                    "{} no admite {}, así que se quitó de tu reserva.",
                    name,
                    guests_label(guest_count)
                ));
            }
            || ()
        }
    });

    let on_select_date = {
        let booking = booking.clone();
        Callback::from(move |day: NaiveDate| booking.dispatch(BookingAction::SelectDate(day)))
    };
    let on_prev = {
        let booking = booking.clone();
        Callback::from(move |_: ()| booking.dispatch(BookingAction::PreviousMonth))
    };
    let on_next = {
        let booking = booking.clone();
        Callback::from(move |_: ()| booking.dispatch(BookingAction::NextMonth))
    };

    let on_confirm_dates = {
        let ctx = ctx.clone();
        let search = availability.search.clone();
        Callback::from(move |_: ()| {
            let controller = &ctx.booking.controller;
            match controller.require_complete_range() {
                Ok(()) => {
                    ctx.modals.close();
                    search.emit(controller.guest_count());
                }
                Err(e) => ctx.notifier.error(e.to_string()),
            }
        })
    };

    let on_guest_change = {
        let booking = booking.clone();
        Callback::from(move |delta: i32| booking.dispatch(BookingAction::UpdateGuests(delta)))
    };

    let on_toggle_room = {
        let ctx = ctx.clone();
        Callback::from(move |room: RoomCardView| {
            if room.selected {
                ctx.notifier.info(format!("{} se quitó de tu reserva.", room.name));
            } else {
                ctx.notifier.info(format!("{} añadida a tu reserva.", room.name));
            }
            ctx.booking.dispatch(BookingAction::SelectRoom {
                id: room.id,
                name: room.name,
                price: room.price_per_night,
            });
        })
    };

    let on_continue = {
        let ctx = ctx.clone();
        Callback::from(move |_: ()| {
            match ctx.booking.controller.begin_checkout(ctx.session.session()) {
                Ok(()) => ctx.go(Page::Checkout),
                Err(BookingError::NotLoggedIn) => {
                    ctx.notifier.info(BookingError::NotLoggedIn.to_string());
                    ctx.modals.open(ModalKind::Login);
                }
                Err(e) => ctx.notifier.error(e.to_string()),
            }
        })
    };

    let open_modal = |kind: ModalKind| {
        let modals = ctx.modals.clone();
        Callback::from(move |_: MouseEvent| modals.toggle(kind))
    };
    let on_search_click = {
        let on_confirm_dates = on_confirm_dates.clone();
        Callback::from(move |_: MouseEvent| on_confirm_dates.emit(()))
    };

    let range = controller.range();
    let date_label = |date: Option<NaiveDate>| {
        date.map(short_date_label).unwrap_or_else(|| "-- ---".to_string())
    };

    let results = match &availability.state.rooms {
        _ if availability.state.loading => html! {
            <p class="rooms-loading">{"Buscando habitaciones disponibles..."}</p>
        },
        None => html! {
            <p class="rooms-hint">{"Selecciona tus fechas para ver las habitaciones disponibles."}</p>
        },
        Some(rooms) if rooms.is_empty() => html! {
            <p class="rooms-empty">
                {format!("No hay habitaciones para {}.", guests_label(guest_count))}
            </p>
        },
        Some(rooms) => html! {
            <div class="room-list">
                {for controller.room_cards(rooms).into_iter().map(|room| {
                    let key = room.id;
                    html! {
                        <Reveal key={key}>
                            <RoomCard room={room} on_toggle={on_toggle_room.clone()} />
                        </Reveal>
                    }
                })}
            </div>
        },
    };

    html! {
        <section class="booking-page">
            <div class="booking-widget">
                <button type="button" class="date-display" onclick={open_modal(ModalKind::Calendar)}>
                    <span class="date-field">
                        <small>{"Llegada"}</small>
                        <strong>{date_label(range.check_in())}</strong>
                    </span>
                    <span class="date-field">
                        <small>{"Salida"}</small>
                        <strong>{date_label(range.check_out())}</strong>
                    </span>
                </button>
                <button type="button" class="guest-display" onclick={open_modal(ModalKind::Guests)}>
                    <small>{"Huéspedes"}</small>
                    <strong>{guests_label(guest_count)}</strong>
                </button>
                <button type="button" class="btn btn-primary" onclick={on_search_click}>
                    {"BUSCAR"}
                </button>
            </div>

            <Modal
                is_open={calendar_open}
                on_close={ctx.modals.close_callback()}
                class="calendar-modal"
            >
                <DualCalendar
                    view={controller.calendar_view()}
                    on_select={on_select_date}
                    {on_prev}
                    {on_next}
                    on_confirm={on_confirm_dates}
                />
            </Modal>

            <Modal
                is_open={ctx.modals.is_open(ModalKind::Guests)}
                on_close={ctx.modals.close_callback()}
                class="guest-modal"
            >
                <GuestSelector
                    count={guest_count}
                    on_change={on_guest_change}
                    on_done={ctx.modals.close_callback()}
                />
            </Modal>

            <div class="booking-layout">
                <div class="room-results">{results}</div>
                <CartSummary view={controller.cart_view()} {on_continue} />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_guest_change_searches_without_dates() {
        assert!(should_search(false, false));
        assert!(should_search(false, true));
    }

    #[wasm_bindgen_test]
    fn test_load_searches_only_with_stored_stay() {
        assert!(should_search(true, true));
        assert!(!should_search(true, false));
    }
}
