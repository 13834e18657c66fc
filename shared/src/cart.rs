use serde::{Deserialize, Serialize};

use crate::date_range::DateRange;
use crate::format_price;

pub const MIN_GUESTS: u8 = 1;
pub const MAX_GUESTS: u8 = 6;
pub const DEFAULT_GUESTS: u8 = 2;

/// Room offering currently in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedRoom {
    pub id: i64,
    pub name: String,
    pub price_per_night: f64,
}

/// In-progress, unconfirmed reservation selection
#[derive(Debug, Clone, PartialEq)]
pub struct BookingCart {
    room: Option<SelectedRoom>,
    guest_count: u8,
}

impl Default for BookingCart {
    fn default() -> Self {
        Self {
            room: None,
            guest_count: DEFAULT_GUESTS,
        }
    }
}

impl BookingCart {
    /// Restore a cart. Out-of-range guest counts fall back to the default and
    /// rooms without a name are discarded.
    pub fn restore(room: Option<SelectedRoom>, guest_count: u8) -> Self {
        let guest_count = if (MIN_GUESTS..=MAX_GUESTS).contains(&guest_count) {
            guest_count
        } else {
            DEFAULT_GUESTS
        };
        let room = room.filter(|room| !room.name.trim().is_empty());
        Self { room, guest_count }
    }

    pub fn room(&self) -> Option<&SelectedRoom> {
        self.room.as_ref()
    }

    pub fn guest_count(&self) -> u8 {
        self.guest_count
    }

    pub fn is_selected(&self, room_id: i64) -> bool {
        self.room.as_ref().map(|room| room.id) == Some(room_id)
    }

    /// Select a room, or deselect it when it is already the selected one.
    /// Returns whether a room is selected afterwards.
    pub fn select_room(&mut self, id: i64, name: &str, price_per_night: f64) -> bool {
        if self.is_selected(id) {
            self.room = None;
            return false;
        }
        self.room = Some(SelectedRoom {
            id,
            name: name.to_string(),
            price_per_night,
        });
        true
    }

    pub fn remove_room(&mut self) {
        self.room = None;
    }

    /// Apply `delta` to the guest count. Changes that would leave
    /// `[MIN_GUESTS, MAX_GUESTS]` are ignored; returns whether the count changed.
    pub fn update_guest_count(&mut self, delta: i32) -> bool {
        let Some(next) = i32::from(self.guest_count).checked_add(delta) else {
            return false;
        };
        if delta == 0 || next < i32::from(MIN_GUESTS) || next > i32::from(MAX_GUESTS) {
            return false;
        }
        self.guest_count = next as u8;
        true
    }

    /// `price × guests × nights`, zero until both the range and a room are set
    pub fn total(&self, range: &DateRange) -> f64 {
        match (&self.room, range.nights()) {
            (Some(room), Some(nights)) => {
                room.price_per_night * f64::from(self.guest_count) * nights as f64
            }
            _ => 0.0,
        }
    }

    /// Whether the guest may proceed to checkout
    pub fn can_continue(&self, range: &DateRange) -> bool {
        self.room.is_some() && range.is_complete()
    }

    /// Render-ready summary of the cart
    pub fn view(&self, range: &DateRange) -> CartView {
        let dates_label = match (range.check_in(), range.check_out()) {
            (Some(start), Some(end)) => Some(format!(
                "{} - {}",
                short_date_label(start),
                short_date_label(end)
            )),
            _ => None,
        };
        let room_name = if self.can_continue(range) {
            self.room.as_ref().map(|room| room.name.clone())
        } else {
            None
        };
        let total = self.total(range);
        CartView {
            dates_label,
            guests_label: guests_label(self.guest_count),
            room_name,
            nights: range.nights().unwrap_or(0),
            total,
            total_label: format_price(total),
            can_continue: self.can_continue(range),
        }
    }
}

/// Everything the cart card displays
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    pub dates_label: Option<String>,
    pub guests_label: String,
    /// Only shown once the cart is complete
    pub room_name: Option<String>,
    pub nights: i64,
    pub total: f64,
    pub total_label: String,
    pub can_continue: bool,
}

/// "1 adulto" / "3 adultos"
pub fn guests_label(count: u8) -> String {
    if count == 1 {
        "1 adulto".to_string()
    } else {
        format!("{} adultos", count)
    }
}

const SHORT_MONTHS: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

/// "10 mar"
pub fn short_date_label(date: chrono::NaiveDate) -> String {
    use chrono::Datelike;
    let month = SHORT_MONTHS
        .get(date.month0() as usize)
        .copied()
        .unwrap_or("");
    format!("{} {}", date.day(), month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn march_stay() -> DateRange {
        DateRange::from_parts(Some(d(2026, 3, 10)), Some(d(2026, 3, 12)))
    }

    #[test]
    fn test_total_for_two_guests_two_nights() {
        let mut cart = BookingCart::default();
        assert_eq!(cart.guest_count(), 2);
        cart.select_room(1, "Deluxe", 10000.0);
        assert_eq!(cart.total(&march_stay()), 40000.0);
        assert!(cart.can_continue(&march_stay()));
    }

    #[test]
    fn test_total_is_zero_when_incomplete() {
        let mut cart = BookingCart::default();
        assert_eq!(cart.total(&march_stay()), 0.0);
        cart.select_room(1, "Deluxe", 10000.0);
        let half = DateRange::from_parts(Some(d(2026, 3, 10)), None);
        assert_eq!(cart.total(&half), 0.0);
        assert!(!cart.can_continue(&half));
        assert_eq!(cart.total(&DateRange::empty()), 0.0);
    }

    #[test]
    fn test_select_same_room_twice_deselects() {
        let mut cart = BookingCart::default();
        assert!(cart.select_room(4, "Suite", 30000.0));
        assert!(!cart.select_room(4, "Suite", 30000.0));
        assert_eq!(cart, BookingCart::default());
        assert!(!cart.can_continue(&march_stay()));
    }

    #[test]
    fn test_select_other_room_replaces() {
        let mut cart = BookingCart::default();
        cart.select_room(4, "Suite", 30000.0);
        assert!(cart.select_room(5, "Twin", 12000.0));
        assert!(cart.is_selected(5));
        assert!(!cart.is_selected(4));
    }

    #[test]
    fn test_guest_count_stays_in_bounds() {
        let mut cart = BookingCart::default();
        assert!(cart.update_guest_count(-1));
        assert_eq!(cart.guest_count(), 1);
        assert!(!cart.update_guest_count(-1));
        assert_eq!(cart.guest_count(), 1);

        for _ in 0..5 {
            assert!(cart.update_guest_count(1));
        }
        assert_eq!(cart.guest_count(), 6);
        assert!(!cart.update_guest_count(1));
        assert_eq!(cart.guest_count(), 6);

        // a jump past the boundary is ignored, not clamped
        let mut cart = BookingCart::default();
        assert!(!cart.update_guest_count(5));
        assert_eq!(cart.guest_count(), 2);
    }

    #[test]
    fn test_extreme_deltas_are_ignored() {
        let mut cart = BookingCart::default();
        assert!(!cart.update_guest_count(i32::MAX));
        assert!(!cart.update_guest_count(i32::MIN));
        assert_eq!(cart.guest_count(), 2);

        cart.update_guest_count(4);
        assert!(!cart.update_guest_count(i32::MAX));
        assert_eq!(cart.guest_count(), 6);
    }

    #[test]
    fn test_restore_sanitizes() {
        let cart = BookingCart::restore(None, 9);
        assert_eq!(cart.guest_count(), DEFAULT_GUESTS);
        let room = SelectedRoom {
            id: 1,
            name: " ".to_string(),
            price_per_night: 1.0,
        };
        assert_eq!(BookingCart::restore(Some(room), 3).room(), None);
    }

    #[test]
    fn test_view_labels() {
        let mut cart = BookingCart::default();
        cart.select_room(1, "Deluxe", 10000.0);
        let view = cart.view(&march_stay());
        assert_eq!(view.dates_label.as_deref(), Some("10 mar - 12 mar"));
        assert_eq!(view.guests_label, "2 adultos");
        assert_eq!(view.room_name.as_deref(), Some("Deluxe"));
        assert_eq!(view.nights, 2);
        assert_eq!(view.total_label, "¥40.000");
        assert!(view.can_continue);

        let view = BookingCart::default().view(&DateRange::empty());
        assert_eq!(view.dates_label, None);
        assert_eq!(view.room_name, None);
        assert_eq!(view.total_label, "¥0");
        assert!(!view.can_continue);
        assert_eq!(guests_label(1), "1 adulto");
    }
}
