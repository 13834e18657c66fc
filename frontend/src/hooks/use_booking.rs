use std::rc::Rc;

use booking_shared::{BookingController, RoomType, UnavailableDates};
use chrono::NaiveDate;
use yew::prelude::*;

use crate::services::logging::Logger;
use crate::services::session_storage::BrowserSessionStore;

pub type Booking = BookingController<BrowserSessionStore>;

/// Booking page state. Every transition goes through the controller, which
/// also mirrors it into session storage.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingState {
    pub controller: Booking,
    /// Set when the last availability reconciliation removed the selected room
    pub dropped_room: Option<String>,
}

pub enum BookingAction {
    SelectDate(NaiveDate),
    SelectRoom { id: i64, name: String, price: f64 },
    UpdateGuests(i32),
    SetUnavailable(UnavailableDates),
    NextMonth,
    PreviousMonth,
    ReconcileRooms(Rc<Vec<RoomType>>),
    ClearAfterReservation,
    /// Re-read session storage, e.g. after another page wrote to it
    Reload,
}

impl Reducible for BookingState {
    type Action = BookingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut controller = self.controller.clone();
        let mut dropped_room = None;
        let changed = match action {
            BookingAction::SelectDate(day) => controller.select_date(day),
            BookingAction::SelectRoom { id, name, price } => {
                controller.select_room(id, &name, price);
                true
            }
            BookingAction::UpdateGuests(delta) => controller.update_guest_count(delta),
            BookingAction::SetUnavailable(dates) => {
                controller.set_unavailable_dates(dates);
                true
            }
            BookingAction::NextMonth => {
                controller.next_month();
                true
            }
            BookingAction::PreviousMonth => controller.previous_month(),
            BookingAction::ReconcileRooms(rooms) => {
                let name = controller.selected_room().map(|room| room.name.clone());
                if controller.reconcile_available_rooms(&rooms) {
                    dropped_room = name;
                    true
                } else {
                    false
                }
            }
            BookingAction::ClearAfterReservation => {
                controller.clear_after_reservation();
                true
            }
            BookingAction::Reload => {
                let unavailable = controller.unavailable_dates().clone();
                controller = BookingController::rehydrate(BrowserSessionStore, controller.today());
                controller.set_unavailable_dates(unavailable);
                true
            }
        };

        if !changed {
            return self;
        }
        Rc::new(Self {
            controller,
            dropped_room,
        })
    }
}

pub type BookingHandle = UseReducerHandle<BookingState>;

/// Page-wide booking state, created once by the app root
#[hook]
pub fn use_booking_state(today: NaiveDate) -> BookingHandle {
    use_reducer(move || {
        Logger::info_with_component("use-booking", &format!("rehydrating booking, today is {}", today));
        BookingState {
            controller: BookingController::rehydrate(BrowserSessionStore, today),
            dropped_room: None,
        }
    })
}
