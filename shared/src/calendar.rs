//! Calendar grid generation for the date-range picker.
//!
//! Builds a declarative description of each visible month: leading padding
//! cells so day 1 lands under its weekday column, then one cell per day with
//! its status and selection markers. The UI only turns these cells into
//! markup.

use chrono::{Datelike, NaiveDate};

use crate::date_range::{DateRange, UnavailableDates};
use crate::month_name;

/// Base status of a day, in precedence order: past beats unavailable beats today
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Past,
    Unavailable,
    Today,
    Available,
}

impl DayStatus {
    fn css_class(self) -> Option<&'static str> {
        match self {
            DayStatus::Past => Some("day-past"),
            DayStatus::Unavailable => Some("day-unavailable"),
            DayStatus::Today => Some("day-today"),
            DayStatus::Available => None,
        }
    }
}

/// One cell of the 7-column grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarDayCell {
    /// Blank cell before the first day of the month
    Padding,
    MonthDay {
        date: NaiveDate,
        status: DayStatus,
        /// Check-in or check-out
        selected: bool,
        /// Strictly between check-in and check-out
        in_range: bool,
    },
}

impl CalendarDayCell {
    /// Past and unavailable days never accept clicks
    pub fn is_selectable(&self) -> bool {
        matches!(
            self,
            CalendarDayCell::MonthDay { status, .. }
                if !matches!(status, DayStatus::Past | DayStatus::Unavailable)
        )
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            CalendarDayCell::Padding => None,
            CalendarDayCell::MonthDay { date, .. } => Some(*date),
        }
    }

    /// Space-separated CSS classes for the cell
    pub fn css_class(&self) -> String {
        match self {
            CalendarDayCell::Padding => "calendar-day empty".to_string(),
            CalendarDayCell::MonthDay {
                status,
                selected,
                in_range,
                ..
            } => {
                let mut class = String::from("calendar-day");
                if let Some(status_class) = status.css_class() {
                    class.push(' ');
                    class.push_str(status_class);
                }
                if *selected {
                    class.push_str(" day-selected");
                }
                if *in_range {
                    class.push_str(" day-in-range");
                }
                class
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonthView {
    pub year: i32,
    pub month: u32,
    /// e.g. "Marzo 2026"
    pub title: String,
    /// 0 = Sunday
    pub first_day_of_week: u32,
    pub cells: Vec<CalendarDayCell>,
}

/// Left and right month of the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DualCalendarView {
    pub left: CalendarMonthView,
    pub right: CalendarMonthView,
    /// False while the left month is the current month
    pub can_go_back: bool,
}

/// Number of days in a month, accounting for leap years
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Weekday of the first of the month (0 = Sunday, 6 = Saturday)
pub fn first_day_of_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|date| date.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Build the grid for one month
pub fn build_month(
    year: i32,
    month: u32,
    today: NaiveDate,
    unavailable: &UnavailableDates,
    range: &DateRange,
) -> CalendarMonthView {
    let first_day = first_day_of_month(year, month);
    let mut cells = Vec::with_capacity(first_day as usize + 31);

    for _ in 0..first_day {
        cells.push(CalendarDayCell::Padding);
    }

    for day in 1..=days_in_month(year, month) {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            continue;
        };
        let status = if date < today {
            DayStatus::Past
        } else if unavailable.contains(date) {
            DayStatus::Unavailable
        } else if date == today {
            DayStatus::Today
        } else {
            DayStatus::Available
        };
        cells.push(CalendarDayCell::MonthDay {
            date,
            status,
            selected: range.is_endpoint(date),
            in_range: range.is_in_range(date),
        });
    }

    log::debug!(
        "built calendar {}/{}: {} padding, {} cells",
        month,
        year,
        first_day,
        cells.len()
    );

    CalendarMonthView {
        year,
        month,
        title: format!("{} {}", month_name(month), year),
        first_day_of_week: first_day,
        cells,
    }
}

/// Left month shown by the dual calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCursor {
    pub year: i32,
    /// 1-based
    pub month: u32,
}

impl CalendarCursor {
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    /// Cursor on the month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    pub fn following(self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    pub fn preceding(self) -> Self {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    /// Going back is refused once the cursor reaches the month of `today`
    pub fn can_go_back(self, today: NaiveDate) -> bool {
        (self.year, self.month) > (today.year(), today.month())
    }

    pub fn advance(&mut self) {
        *self = self.following();
    }

    /// Move one month back, returns false when already at the current month
    pub fn retreat(&mut self, today: NaiveDate) -> bool {
        if !self.can_go_back(today) {
            return false;
        }
        *self = self.preceding();
        true
    }
}

/// Both visible months starting at `cursor`
pub fn build_dual(
    cursor: CalendarCursor,
    today: NaiveDate,
    unavailable: &UnavailableDates,
    range: &DateRange,
) -> DualCalendarView {
    let right = cursor.following();
    DualCalendarView {
        left: build_month(cursor.year, cursor.month, today, unavailable, range),
        right: build_month(right.year, right.month, today, unavailable, range),
        can_go_back: cursor.can_go_back(today),
    }
}
