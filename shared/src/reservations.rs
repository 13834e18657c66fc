//! Presentation of the guest's reservation history.

use chrono::Datelike;

use crate::date_range::parse_stored_date;
use crate::{format_price, month_name, ReservationRecord};

/// Card badge for a reservation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationStatus {
    Confirmed,
    Completed,
    Cancelled,
    Pending,
}

impl ReservationStatus {
    pub fn from_state(state: Option<&str>) -> Self {
        match state {
            Some("Paid" | "Reserved" | "Confirmed") => ReservationStatus::Confirmed,
            Some("Check-out") => ReservationStatus::Completed,
            Some("Cancelled") => ReservationStatus::Cancelled,
            _ => ReservationStatus::Pending,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ReservationStatus::Confirmed | ReservationStatus::Completed => "status-paid",
            ReservationStatus::Cancelled => "status-cancelled",
            ReservationStatus::Pending => "status-pending",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReservationStatus::Confirmed => "Confirmada",
            ReservationStatus::Completed => "Completada",
            ReservationStatus::Cancelled => "Cancelada",
            ReservationStatus::Pending => "Pendiente",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReservationCardView {
    pub code: String,
    pub status: ReservationStatus,
    pub check_in_label: String,
    pub check_out_label: String,
    pub room_name: String,
    pub guests_label: String,
    pub room_subtotal_label: String,
    /// Only present when there were extra charges
    pub consumption_label: Option<String>,
    pub total_label: String,
}

impl ReservationCardView {
    pub fn from_record(record: &ReservationRecord) -> Self {
        let consumption = record.total_consumption.unwrap_or(0.0);
        Self {
            code: record.reservation_code.clone(),
            status: ReservationStatus::from_state(record.state.as_deref()),
            check_in_label: long_date_label(&record.entry_date),
            check_out_label: long_date_label(&record.departure_date),
            room_name: room_name(record),
            guests_label: format!("{} Adultos", record.num_adults.unwrap_or(0)),
            room_subtotal_label: format_price(record.room_subtotal.unwrap_or(0.0)),
            consumption_label: (consumption > 0.0).then(|| format_price(consumption)),
            total_label: format_price(record.total_pay.unwrap_or(0.0)),
        }
    }
}

/// Room type name, else the room number, else a generic name
pub fn room_name(record: &ReservationRecord) -> String {
    let room = record.room.as_ref();
    if let Some(name) = room
        .and_then(|room| room.room_type.as_ref())
        .and_then(|room_type| room_type.name_type.as_deref())
        .filter(|name| !name.is_empty())
    {
        return name.to_string();
    }
    if let Some(number) = room.and_then(|room| room.room_number.as_deref()) {
        return format!("Habitación {}", number);
    }
    "Habitación Estándar".to_string()
}

/// "15 de marzo de 2026"; unparseable input is shown untouched
pub fn long_date_label(raw: &str) -> String {
    match parse_stored_date(raw) {
        Some(date) => format!(
            "{} de {} de {}",
            date.day(),
            month_name(date.month()).to_lowercase(),
            date.year()
        ),
        None => raw.to_string(),
    }
}

/// Cards for the history page, most recent reservation first
pub fn history_cards(records: &[ReservationRecord]) -> Vec<ReservationCardView> {
    records.iter().rev().map(ReservationCardView::from_record).collect()
}
