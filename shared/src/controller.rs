//! # Booking controller
//!
//! Owns every piece of booking state on the page: the date-range selector,
//! the cart, the fully booked days and the calendar cursor. Each mutation is
//! mirrored into the [`SessionStore`] so a reload picks up where the guest
//! left off, and every view the UI draws is derived from this one value.

use chrono::NaiveDate;

use crate::calendar::{build_dual, CalendarCursor, DualCalendarView};
use crate::cart::{BookingCart, CartView, SelectedRoom};
use crate::checkout::ContactDetails;
use crate::date_range::{
    is_selectable, parse_stored_date, to_iso, DateRange, DateRangeSelector, SelectionOutcome,
    UnavailableDates,
};
use crate::error::BookingError;
use crate::session::GuestSession;
use crate::storage::{keys, log_storage_failure, set_or_remove, SessionStore};
use crate::{
    format_price, ConfirmReservationRequest, ReservationGuest, ReservationRoomRef, RoomType,
};

#[derive(Debug, Clone, PartialEq)]
pub struct BookingController<S: SessionStore> {
    store: S,
    today: NaiveDate,
    selector: DateRangeSelector,
    cart: BookingCart,
    unavailable: UnavailableDates,
    cursor: CalendarCursor,
}

impl<S: SessionStore> BookingController<S> {
    /// Rebuild the booking state from whatever the store holds. Missing or
    /// malformed entries fall back to defaults.
    pub fn rehydrate(store: S, today: NaiveDate) -> Self {
        let read_date = |key: &str| store.get(key).and_then(|raw| parse_stored_date(&raw));
        let range = DateRange::from_parts(read_date(keys::CHECK_IN), read_date(keys::CHECK_OUT));

        let guest_count = store
            .get(keys::ADULTS)
            .and_then(|raw| raw.trim().parse::<u8>().ok())
            .unwrap_or(0);

        let room = match (
            store.get(keys::ROOM_ID).and_then(|raw| raw.trim().parse::<i64>().ok()),
            store.get(keys::ROOM_NAME),
            store.get(keys::ROOM_PRICE).and_then(|raw| raw.trim().parse::<f64>().ok()),
        ) {
            (Some(id), Some(name), Some(price_per_night)) => Some(SelectedRoom {
                id,
                name,
                price_per_night,
            }),
            _ => None,
        };

        let cart = BookingCart::restore(room, guest_count);
        log::info!(
            "rehydrated booking: range complete={}, room={:?}, guests={}",
            range.is_complete(),
            cart.room().map(|room| room.id),
            cart.guest_count()
        );

        Self {
            store,
            today,
            selector: DateRangeSelector::new(range),
            cart,
            unavailable: UnavailableDates::default(),
            cursor: CalendarCursor::containing(today),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn range(&self) -> DateRange {
        self.selector.range()
    }

    pub fn cart(&self) -> &BookingCart {
        &self.cart
    }

    pub fn guest_count(&self) -> u8 {
        self.cart.guest_count()
    }

    pub fn selected_room(&self) -> Option<&SelectedRoom> {
        self.cart.room()
    }

    pub fn unavailable_dates(&self) -> &UnavailableDates {
        &self.unavailable
    }

    /// Handle a click on a calendar day. Past and fully booked days are
    /// ignored; returns whether the range changed.
    pub fn select_date(&mut self, day: NaiveDate) -> bool {
        if !is_selectable(day, self.today, &self.unavailable) {
            log::debug!("ignoring click on disabled day {}", day);
            return false;
        }
        let outcome = self.selector.select(day);
        log::debug!("date {} selected: {:?}", day, outcome);
        if outcome == SelectionOutcome::CheckOutSet {
            log::info!("stay selected: {} night(s)", self.nights());
        }
        self.persist_range();
        true
    }

    /// Toggle a room in the cart; returns whether a room is selected afterwards
    pub fn select_room(&mut self, id: i64, name: &str, price_per_night: f64) -> bool {
        let selected = self.cart.select_room(id, name, price_per_night);
        log::info!("room {} {}", id, if selected { "selected" } else { "removed" });
        self.persist_room();
        selected
    }

    pub fn remove_room(&mut self) {
        self.cart.remove_room();
        self.persist_room();
    }

    /// Returns whether the count changed. A change means availability has to
    /// be queried again.
    pub fn update_guest_count(&mut self, delta: i32) -> bool {
        if !self.cart.update_guest_count(delta) {
            return false;
        }
        log_storage_failure(
            "store guest count",
            self.store
                .set(keys::ADULTS, &self.cart.guest_count().to_string()),
        );
        true
    }

    pub fn set_unavailable_dates(&mut self, unavailable: UnavailableDates) {
        log::debug!("{} unavailable day(s) loaded", unavailable.len());
        self.unavailable = unavailable;
    }

    pub fn next_month(&mut self) {
        self.cursor.advance();
    }

    /// Refused while the left month is the current month
    pub fn previous_month(&mut self) -> bool {
        self.cursor.retreat(self.today)
    }

    pub fn calendar_view(&self) -> DualCalendarView {
        build_dual(self.cursor, self.today, &self.unavailable, &self.range())
    }

    pub fn cart_view(&self) -> CartView {
        self.cart.view(&self.range())
    }

    pub fn nights(&self) -> i64 {
        self.range().nights().unwrap_or(0)
    }

    pub fn total(&self) -> f64 {
        self.cart.total(&self.range())
    }

    pub fn can_continue(&self) -> bool {
        self.cart.can_continue(&self.range())
    }

    /// Gate for confirming the calendar and running the room search
    pub fn require_complete_range(&self) -> Result<(), BookingError> {
        if self.range().is_complete() {
            Ok(())
        } else {
            Err(BookingError::IncompleteDateRange)
        }
    }

    /// Gate for leaving the booking page towards checkout
    pub fn begin_checkout(&self, session: &GuestSession) -> Result<(), BookingError> {
        if !session.is_logged_in {
            return Err(BookingError::NotLoggedIn);
        }
        self.require_complete_range()?;
        if self.cart.room().is_none() {
            return Err(BookingError::NoRoomSelected);
        }
        Ok(())
    }

    /// Checkout is only reachable with a stored check-in and room
    pub fn checkout_ready(&self) -> bool {
        self.range().check_in().is_some() && self.cart.room().is_some()
    }

    /// Drop the selected room when it no longer appears in the latest
    /// availability list. Returns true when a room was dropped.
    pub fn reconcile_available_rooms(&mut self, rooms: &[RoomType]) -> bool {
        let Some(selected) = self.cart.room() else {
            return false;
        };
        if rooms.iter().any(|room| room.id_tipo == selected.id) {
            return false;
        }
        log::info!(
            "selected room {} cannot host {} guest(s), removing it",
            selected.id,
            self.cart.guest_count()
        );
        self.remove_room();
        true
    }

    /// Room cards for the availability list, with the cart toggle state
    pub fn room_cards(&self, rooms: &[RoomType]) -> Vec<RoomCardView> {
        rooms
            .iter()
            .map(|room| RoomCardView::new(room, self.cart.is_selected(room.id_tipo)))
            .collect()
    }

    /// Build the confirmation payload from the cart and validated contact details
    pub fn reservation_request(
        &self,
        guest_id: i64,
        contact: &ContactDetails,
    ) -> Result<ConfirmReservationRequest, BookingError> {
        let range = self.range();
        let (Some(check_in), Some(check_out)) = (range.check_in(), range.check_out()) else {
            return Err(BookingError::IncompleteDateRange);
        };
        let room = self.cart.room().ok_or(BookingError::NoRoomSelected)?;

        Ok(ConfirmReservationRequest {
            guest: ReservationGuest {
                id_guest: guest_id,
                phone: contact.phone.clone(),
                mobile_phone: contact.mobile_phone.clone(),
                address: contact.address.clone(),
                country: contact.country.clone(),
                city: contact.city.clone(),
                postal_code: contact.postal_code.clone(),
            },
            room: ReservationRoomRef { id_room: room.id },
            entry_date: to_iso(check_in),
            departure_date: to_iso(check_out),
            price_per_night: room.price_per_night,
            num_adults: self.cart.guest_count(),
            observations: contact.observations.clone(),
            payment_method: contact.payment_method.code().to_string(),
        })
    }

    /// Forget the stay and room once the reservation is confirmed. The guest
    /// identity and guest count stay.
    pub fn clear_after_reservation(&mut self) {
        self.selector.clear();
        self.cart.remove_room();
        for key in [
            keys::CHECK_IN,
            keys::CHECK_OUT,
            keys::ROOM_ID,
            keys::ROOM_NAME,
            keys::ROOM_PRICE,
            keys::CHECKOUT_DRAFT,
        ] {
            log_storage_failure("clear booking key", self.store.remove(key));
        }
        log::info!("booking state cleared after reservation");
    }

    fn persist_range(&self) {
        let range = self.range();
        log_storage_failure(
            "store check-in",
            set_or_remove(&self.store, keys::CHECK_IN, range.check_in().map(to_iso)),
        );
        log_storage_failure(
            "store check-out",
            set_or_remove(&self.store, keys::CHECK_OUT, range.check_out().map(to_iso)),
        );
    }

    fn persist_room(&self) {
        let room = self.cart.room();
        log_storage_failure(
            "store room id",
            set_or_remove(&self.store, keys::ROOM_ID, room.map(|room| room.id.to_string())),
        );
        log_storage_failure(
            "store room name",
            set_or_remove(&self.store, keys::ROOM_NAME, room.map(|room| room.name.clone())),
        );
        log_storage_failure(
            "store room price",
            set_or_remove(
                &self.store,
                keys::ROOM_PRICE,
                room.map(|room| room.price_per_night.to_string()),
            ),
        );
    }
}

/// One card of the room availability list
#[derive(Debug, Clone, PartialEq)]
pub struct RoomCardView {
    pub id: i64,
    pub name: String,
    pub price_per_night: f64,
    pub price_label: String,
    pub capacity_label: String,
    pub features: Vec<String>,
    pub image_url: Option<String>,
    pub selected: bool,
}

impl RoomCardView {
    pub fn new(room: &RoomType, selected: bool) -> Self {
        Self {
            id: room.id_tipo,
            name: room.name_type.clone(),
            price_per_night: room.base_price,
            price_label: format_price(room.base_price),
            capacity_label: format!("Hasta {} personas", room.capacity_people),
            features: room.features().into_iter().map(str::to_string).collect(),
            image_url: room.image_urls().first().map(|url| url.to_string()),
            selected,
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.selected {
            "REMOVER RESERVA"
        } else {
            "RESERVAR AHORA"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::{CheckoutDraft, CheckoutForm, PaymentMethod};
    use crate::storage::MemorySessionStore;
    use crate::AuthResponse;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn today() -> NaiveDate {
        d(2026, 2, 26)
    }

    fn controller() -> (BookingController<MemorySessionStore>, MemorySessionStore) {
        let store = MemorySessionStore::new();
        (BookingController::rehydrate(store.clone(), today()), store)
    }

    fn room_type(id: i64, capacity: u32) -> RoomType {
        RoomType {
            id_tipo: id,
            name_type: format!("Room {}", id),
            capacity_people: capacity,
            base_price: 10000.0,
            room_size: None,
            bed_type: None,
            short_description: None,
            image_url: None,
        }
    }

    fn contact() -> ContactDetails {
        CheckoutForm {
            phone: "600".to_string(),
            address: "Calle 1".to_string(),
            city: "Kyoto".to_string(),
            postal_code: "600-8216".to_string(),
            country: "Japan".to_string(),
            payment_method: Some(PaymentMethod::Transfer),
            ..CheckoutForm::default()
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn test_two_nights_for_two_guests() {
        let (mut booking, _) = controller();
        assert!(booking.select_date(d(2026, 3, 10)));
        assert!(booking.select_date(d(2026, 3, 12)));
        booking.select_room(1, "Deluxe", 10000.0);

        assert_eq!(booking.guest_count(), 2);
        assert_eq!(booking.nights(), 2);
        assert_eq!(booking.total(), 40000.0);
        assert!(booking.can_continue());
        assert_eq!(booking.cart_view().total_label, "¥40.000");
    }

    #[test]
    fn test_earlier_click_replaces_check_in() {
        let (mut booking, _) = controller();
        booking.select_date(d(2026, 3, 12));
        booking.select_date(d(2026, 3, 10));
        assert_eq!(
            booking.range(),
            DateRange::from_parts(Some(d(2026, 3, 10)), None)
        );
        assert_eq!(booking.total(), 0.0);
    }

    #[test]
    fn test_room_toggle_disables_continue() {
        let (mut booking, store) = controller();
        booking.select_date(d(2026, 3, 10));
        booking.select_date(d(2026, 3, 12));
        assert!(booking.select_room(7, "Suite", 30000.0));
        assert!(!booking.select_room(7, "Suite", 30000.0));
        assert!(booking.selected_room().is_none());
        assert!(!booking.can_continue());
        assert_eq!(store.get(keys::ROOM_ID), None);
    }

    #[test]
    fn test_disabled_days_do_not_change_state() {
        let (mut booking, store) = controller();
        booking.set_unavailable_dates(UnavailableDates::new([d(2026, 3, 5)]));
        booking.select_date(d(2026, 3, 1));

        let before = booking.range();
        assert!(!booking.select_date(d(2026, 2, 20)));
        assert!(!booking.select_date(d(2026, 3, 5)));
        assert_eq!(booking.range(), before);
        assert_eq!(store.get(keys::CHECK_OUT), None);

        // today itself is selectable
        assert!(booking.select_date(today()));
    }

    #[test]
    fn test_state_survives_reload() {
        let (mut booking, store) = controller();
        booking.select_date(d(2026, 3, 10));
        booking.select_date(d(2026, 3, 12));
        booking.select_room(3, "Suite Sakura", 25000.5);
        booking.update_guest_count(1);

        let reloaded = BookingController::rehydrate(store.clone(), today());
        assert_eq!(reloaded.range(), booking.range());
        assert_eq!(reloaded.cart(), booking.cart());
        assert_eq!(reloaded.total(), booking.total());
        assert_eq!(store.get(keys::CHECK_IN).as_deref(), Some("2026-03-10"));
        assert_eq!(store.get(keys::ADULTS).as_deref(), Some("3"));
    }

    #[test]
    fn test_rehydrate_tolerates_bad_entries() {
        let store = MemorySessionStore::new();
        store.set(keys::CHECK_IN, "2026-03-10T00:00:00Z").unwrap();
        store.set(keys::CHECK_OUT, "garbage").unwrap();
        store.set(keys::ADULTS, "12").unwrap();
        store.set(keys::ROOM_ID, "abc").unwrap();
        store.set(keys::ROOM_NAME, "Suite").unwrap();

        let booking = BookingController::rehydrate(store, today());
        assert_eq!(booking.range().check_in(), Some(d(2026, 3, 10)));
        assert_eq!(booking.range().check_out(), None);
        assert_eq!(booking.guest_count(), 2);
        assert!(booking.selected_room().is_none());
    }

    #[test]
    fn test_guest_count_bounds_are_not_persisted() {
        let (mut booking, store) = controller();
        assert!(!booking.update_guest_count(10));
        assert_eq!(store.get(keys::ADULTS), None);
        assert!(booking.update_guest_count(-1));
        assert_eq!(store.get(keys::ADULTS).as_deref(), Some("1"));
    }

    #[test]
    fn test_previous_month_stops_at_today() {
        let (mut booking, _) = controller();
        assert!(!booking.calendar_view().can_go_back);
        assert!(!booking.previous_month());
        assert_eq!(booking.calendar_view().left.title, "Febrero 2026");

        booking.next_month();
        let view = booking.calendar_view();
        assert_eq!(view.left.title, "Marzo 2026");
        assert_eq!(view.right.title, "Abril 2026");
        assert!(booking.previous_month());
    }

    #[test]
    fn test_complete_range_required() {
        let (mut booking, _) = controller();
        assert_eq!(
            booking.require_complete_range(),
            Err(BookingError::IncompleteDateRange)
        );
        booking.select_date(d(2026, 3, 10));
        booking.select_date(d(2026, 3, 11));
        assert!(booking.require_complete_range().is_ok());
    }

    #[test]
    fn test_begin_checkout_needs_login() {
        let (mut booking, store) = controller();
        booking.select_date(d(2026, 3, 10));
        booking.select_date(d(2026, 3, 11));

        let guest = GuestSession::default();
        assert_eq!(booking.begin_checkout(&guest), Err(BookingError::NotLoggedIn));

        let guest = GuestSession::login(
            &store,
            &AuthResponse {
                guest_name: "Kenji Tanaka".to_string(),
                guest_id: 9,
            },
        );
        assert_eq!(booking.begin_checkout(&guest), Err(BookingError::NoRoomSelected));
        booking.select_room(1, "Deluxe", 10000.0);
        assert!(booking.begin_checkout(&guest).is_ok());
        assert!(booking.checkout_ready());
    }

    #[test]
    fn test_anonymous_guest_can_fill_cart() {
        let (mut booking, store) = controller();
        booking.select_date(d(2026, 3, 10));
        booking.select_date(d(2026, 3, 12));
        assert!(booking.select_room(1, "Deluxe", 10000.0));
        assert_eq!(store.get(keys::ROOM_ID).as_deref(), Some("1"));
        assert!(booking.can_continue());

        // the session only matters once the guest continues
        let guest = GuestSession::default();
        assert_eq!(booking.begin_checkout(&guest), Err(BookingError::NotLoggedIn));
        assert!(booking.selected_room().is_some());
    }

    #[test]
    fn test_stale_room_is_dropped() {
        let (mut booking, store) = controller();
        booking.select_room(1, "Twin", 8000.0);
        let rooms = crate::rooms_for_guests(vec![room_type(1, 2), room_type(2, 6)], 2);
        assert!(!booking.reconcile_available_rooms(&rooms));

        for _ in 0..3 {
            booking.update_guest_count(1);
        }
        let rooms = crate::rooms_for_guests(vec![room_type(1, 2), room_type(2, 6)], booking.guest_count());
        assert!(booking.reconcile_available_rooms(&rooms));
        assert!(booking.selected_room().is_none());
        assert_eq!(store.get(keys::ROOM_ID), None);
    }

    #[test]
    fn test_room_cards_reflect_selection() {
        let (mut booking, _) = controller();
        booking.select_room(2, "Room 2", 10000.0);
        let cards = booking.room_cards(&[room_type(1, 2), room_type(2, 4)]);
        assert_eq!(cards[0].button_label(), "RESERVAR AHORA");
        assert_eq!(cards[1].button_label(), "REMOVER RESERVA");
        assert_eq!(cards[1].price_label, "¥10.000");
        assert_eq!(cards[1].capacity_label, "Hasta 4 personas");
    }

    #[test]
    fn test_reservation_request_and_cleanup() {
        let (mut booking, store) = controller();
        assert_eq!(
            booking.reservation_request(9, &contact()),
            Err(BookingError::IncompleteDateRange)
        );
        booking.select_date(d(2026, 3, 10));
        booking.select_date(d(2026, 3, 12));
        assert_eq!(
            booking.reservation_request(9, &contact()),
            Err(BookingError::NoRoomSelected)
        );
        booking.select_room(4, "Suite", 30000.0);
        CheckoutDraft::save(&store, &CheckoutForm::default()).unwrap();

        let request = booking.reservation_request(9, &contact()).unwrap();
        assert_eq!(request.guest.id_guest, 9);
        assert_eq!(request.room.id_room, 4);
        assert_eq!(request.entry_date, "2026-03-10");
        assert_eq!(request.departure_date, "2026-03-12");
        assert_eq!(request.num_adults, 2);
        assert_eq!(request.payment_method, "Transfer");

        store.set(keys::GUEST_ID, "9").unwrap();
        booking.clear_after_reservation();
        assert!(!booking.checkout_ready());
        assert_eq!(booking.range(), DateRange::empty());
        assert_eq!(store.get(keys::CHECKOUT_DRAFT), None);
        assert_eq!(store.get(keys::ROOM_NAME), None);
        assert_eq!(store.get(keys::GUEST_ID).as_deref(), Some("9"));
    }
}
