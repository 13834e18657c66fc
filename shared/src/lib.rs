//! Shared booking domain for the hotel website frontend.
//!
//! Everything in here is plain Rust with no browser dependency, so the
//! state machines behind the calendar, the cart and the checkout form can be
//! exercised with `cargo test` on the host.

use serde::{Deserialize, Serialize};

pub mod calendar;
pub mod carousel;
pub mod cart;
pub mod checkout;
pub mod controller;
pub mod date_range;
pub mod error;
pub mod reservations;
pub mod sequence;
pub mod session;
pub mod showcase;
pub mod storage;
pub mod validation;

pub use calendar::{CalendarCursor, CalendarDayCell, CalendarMonthView, DayStatus, DualCalendarView};
pub use carousel::Carousel;
pub use cart::{BookingCart, CartView, SelectedRoom, MAX_GUESTS, MIN_GUESTS};
pub use checkout::{AcknowledgementGate, CheckoutDraft, CheckoutForm, ContactDetails, PaymentMethod};
pub use controller::{BookingController, RoomCardView};
pub use date_range::{DateRange, DateRangeSelector, UnavailableDates};
pub use error::{BookingError, StorageError, ValidationError};
pub use reservations::{history_cards, ReservationCardView, ReservationStatus};
pub use sequence::{RequestSequencer, RequestTicket};
pub use session::GuestSession;
pub use showcase::{Season, SeasonTabs, SectionTracker};
pub use storage::{MemorySessionStore, SessionStore};

/// Request body for `POST /api/auth/register`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub names: String,
    pub surnames: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    /// Provisional identity document, replaced once the guest completes their profile
    pub dni: String,
    pub country: String,
    pub city: String,
    /// 1 = active
    pub state: u8,
}

/// Request body for `POST /api/auth/login`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login or registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub guest_name: String,
    pub guest_id: i64,
}

/// Response of `GET /api/auth/check`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthCheckResponse {
    pub is_logged_in: bool,
    #[serde(default)]
    pub guest_name: Option<String>,
    #[serde(default)]
    pub guest_id: Option<i64>,
}

/// Guest profile as returned by `GET /api/guests/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestProfile {
    #[serde(default)]
    pub names: Option<String>,
    #[serde(default)]
    pub surnames: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile_phone: Option<String>,
}

/// Body of `PUT /api/guests/{id}`. An empty password leaves the stored one untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestUpdateRequest {
    pub names: String,
    pub surnames: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Room offering from `GET /api/room-types`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomType {
    pub id_tipo: i64,
    pub name_type: String,
    pub capacity_people: u32,
    pub base_price: f64,
    #[serde(default)]
    pub room_size: Option<String>,
    #[serde(default)]
    pub bed_type: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl RoomType {
    /// Features listed on the room card, in display order, skipping absent ones
    pub fn features(&self) -> Vec<&str> {
        [&self.room_size, &self.bed_type, &self.short_description]
            .into_iter()
            .filter_map(|f| f.as_deref())
            .filter(|f| !f.trim().is_empty())
            .collect()
    }

    /// Gallery images. `imageUrl` may hold several comma-separated URLs.
    pub fn image_urls(&self) -> Vec<&str> {
        self.image_url
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .collect()
    }
}

/// Keep only the room types that can host `guests` people
pub fn rooms_for_guests(rooms: Vec<RoomType>, guests: u8) -> Vec<RoomType> {
    rooms
        .into_iter()
        .filter(|room| room.capacity_people >= u32::from(guests))
        .collect()
}

/// Guest contact block of the confirmation payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationGuest {
    pub id_guest: i64,
    pub phone: String,
    pub mobile_phone: String,
    pub address: String,
    pub country: String,
    pub city: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRoomRef {
    pub id_room: i64,
}

/// Body of `POST /api/reservations/confirm`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmReservationRequest {
    pub guest: ReservationGuest,
    pub room: ReservationRoomRef,
    /// `YYYY-MM-DD`
    pub entry_date: String,
    /// `YYYY-MM-DD`
    pub departure_date: String,
    pub price_per_night: f64,
    pub num_adults: u8,
    pub observations: String,
    pub payment_method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmReservationResponse {
    pub reservation_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRoomTypeRecord {
    #[serde(default)]
    pub name_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRoomRecord {
    #[serde(default)]
    pub room_number: Option<String>,
    #[serde(default)]
    pub room_type: Option<ReservationRoomTypeRecord>,
}

/// One entry of `GET /api/reservations/guest/{guestId}`. The backend may
/// leave relations or money columns null, so nearly everything is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRecord {
    pub reservation_code: String,
    pub entry_date: String,
    pub departure_date: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub room: Option<ReservationRoomRecord>,
    #[serde(default)]
    pub num_adults: Option<u32>,
    #[serde(default)]
    pub room_subtotal: Option<f64>,
    #[serde(default)]
    pub total_consumption: Option<f64>,
    #[serde(default)]
    pub total_pay: Option<f64>,
}

/// Spanish month names used in calendar titles and date labels
pub const MONTH_NAMES: [&str; 12] = [
    "Enero", "Febrero", "Marzo", "Abril", "Mayo", "Junio",
    "Julio", "Agosto", "Septiembre", "Octubre", "Noviembre", "Diciembre",
];

/// Month name for a 1-based month number
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_NAMES.get(idx as usize))
        .copied()
        .unwrap_or("Mes inválido")
}

/// Format a price the way the site shows it: yen sign, dot thousands separator,
/// decimals only when present (`¥40.000`, `¥12.500,5`).
pub fn format_price(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = (amount.abs() * 100.0).round() / 100.0;
    let whole = rounded.trunc() as u64;
    let cents = ((rounded - rounded.trunc()) * 100.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    if cents == 0 {
        format!("{}¥{}", sign, grouped)
    } else if cents % 10 == 0 {
        format!("{}¥{},{}", sign, grouped, cents / 10)
    } else {
        format!("{}¥{},{:02}", sign, grouped, cents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(id: i64, capacity: u32) -> RoomType {
        RoomType {
            id_tipo: id,
            name_type: format!("Room {}", id),
            capacity_people: capacity,
            base_price: 10000.0,
            room_size: Some("45 m²".to_string()),
            bed_type: None,
            short_description: Some("  ".to_string()),
            image_url: None,
        }
    }

    #[test]
    fn test_room_type_deserializes_from_api_shape() {
        let json = r#"{
            "idTipo": 3,
            "nameType": "Suite Sakura",
            "capacityPeople": 4,
            "basePrice": 25000,
            "bedType": "King",
            "imageUrl": "/img/sakura.jpg"
        }"#;
        let room: RoomType = serde_json::from_str(json).unwrap();
        assert_eq!(room.id_tipo, 3);
        assert_eq!(room.capacity_people, 4);
        assert_eq!(room.base_price, 25000.0);
        assert_eq!(room.room_size, None);
        assert_eq!(room.features(), vec!["King"]);
    }

    #[test]
    fn test_image_urls_splits_gallery() {
        let mut suite = room(1, 2);
        assert!(suite.image_urls().is_empty());

        suite.image_url = Some("/img/a.jpg, /img/b.jpg,,".to_string());
        assert_eq!(suite.image_urls(), vec!["/img/a.jpg", "/img/b.jpg"]);
    }

    #[test]
    fn test_rooms_for_guests_filters_by_capacity() {
        let rooms = vec![room(1, 2), room(2, 4), room(3, 6)];
        let ids: Vec<i64> = rooms_for_guests(rooms, 4).iter().map(|r| r.id_tipo).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_features_skip_blank_entries() {
        assert_eq!(room(1, 2).features(), vec!["45 m²"]);
    }

    #[test]
    fn test_auth_check_without_guest() {
        let check: AuthCheckResponse = serde_json::from_str(r#"{"isLoggedIn": false}"#).unwrap();
        assert!(!check.is_logged_in);
        assert_eq!(check.guest_id, None);
    }

    #[test]
    fn test_confirm_request_uses_camel_case() {
        let request = ConfirmReservationRequest {
            guest: ReservationGuest {
                id_guest: 7,
                phone: "600".to_string(),
                mobile_phone: String::new(),
                address: "Calle 1".to_string(),
                country: "Japan".to_string(),
                city: "Kyoto".to_string(),
                postal_code: "600-8216".to_string(),
            },
            room: ReservationRoomRef { id_room: 2 },
            entry_date: "2026-03-10".to_string(),
            departure_date: "2026-03-12".to_string(),
            price_per_night: 10000.0,
            num_adults: 2,
            observations: String::new(),
            payment_method: "Card".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["guest"]["idGuest"], 7);
        assert_eq!(value["guest"]["postalCode"], "600-8216");
        assert_eq!(value["room"]["idRoom"], 2);
        assert_eq!(value["entryDate"], "2026-03-10");
        assert_eq!(value["numAdults"], 2);
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "Enero");
        assert_eq!(month_name(12), "Diciembre");
        assert_eq!(month_name(0), "Mes inválido");
        assert_eq!(month_name(13), "Mes inválido");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(40000.0), "¥40.000");
        assert_eq!(format_price(0.0), "¥0");
        assert_eq!(format_price(999.0), "¥999");
        assert_eq!(format_price(1234567.0), "¥1.234.567");
        assert_eq!(format_price(12500.5), "¥12.500,5");
        assert_eq!(format_price(10.25), "¥10,25");
    }
}
