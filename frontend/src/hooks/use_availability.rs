use std::rc::Rc;

use booking_shared::{rooms_for_guests, RequestSequencer, RoomType};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_booking::{BookingAction, BookingHandle};
use crate::hooks::use_toast::Notifier;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct AvailabilityState {
    /// `None` until the first search completes
    pub rooms: Option<Rc<Vec<RoomType>>>,
    pub loading: bool,
}

pub struct UseAvailabilityResult {
    pub state: AvailabilityState,
    /// Query room types for the given guest count
    pub search: Callback<u8>,
    /// Fetch fully booked days for the calendar
    pub load_unavailable: Callback<()>,
}

/// Room availability for the booking page. Overlapping searches are
/// sequenced: only the response of the most recent one is applied.
#[hook]
pub fn use_availability(
    api_client: &ApiClient,
    booking: &BookingHandle,
    notifier: &Notifier,
) -> UseAvailabilityResult {
    let rooms = use_state(|| Option::<Rc<Vec<RoomType>>>::None);
    let loading = use_state(|| false);
    let sequencer = use_state(RequestSequencer::new);

    let search = {
        let api_client = api_client.clone();
        let booking = booking.clone();
        let notifier = notifier.clone();
        let rooms = rooms.clone();
        let loading = loading.clone();
        let sequencer = (*sequencer).clone();

        use_callback((), move |guests: u8, _| {
            let ticket = sequencer.issue();
            Logger::debug_with_component(
                "availability",
                &format!("searching rooms for {} guest(s), request {:?}", guests, ticket),
            );
            loading.set(true);

            let api_client = api_client.clone();
            let booking = booking.clone();
            let notifier = notifier.clone();
            let rooms = rooms.clone();
            let loading = loading.clone();
            let sequencer = sequencer.clone();

            spawn_local(async move {
                let result = api_client.get_room_types().await;
                let Some(result) = sequencer.accept(ticket, result) else {
                    return;
                };
                loading.set(false);
                match result {
                    Ok(all_rooms) => {
                        let available = Rc::new(rooms_for_guests(all_rooms, guests));
                        Logger::info_with_component(
                            "availability",
                            &format!("{} room type(s) fit {} guest(s)", available.len(), guests),
                        );
                        booking.dispatch(BookingAction::ReconcileRooms(available.clone()));
                        rooms.set(Some(available));
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "availability",
                            &format!("failed to load room types: {}", e),
                        );
                        notifier.error(e.user_message("No se pudieron cargar las habitaciones."));
                    }
                }
            });
        })
    };

    let load_unavailable = {
        let api_client = api_client.clone();
        let booking = booking.clone();
        use_callback((), move |_: (), _| {
            let api_client = api_client.clone();
            let booking = booking.clone();
            spawn_local(async move {
                match api_client.get_unavailable_dates().await {
                    Ok(dates) => booking.dispatch(BookingAction::SetUnavailable(dates)),
                    Err(e) => Logger::error_with_component(
                        "availability",
                        &format!("failed to load unavailable dates: {}", e),
                    ),
                }
            });
        })
    };

    UseAvailabilityResult {
        state: AvailabilityState {
            rooms: (*rooms).clone(),
            loading: *loading,
        },
        search,
        load_unavailable,
    }
}
