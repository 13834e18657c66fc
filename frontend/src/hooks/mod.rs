pub mod use_availability;
pub mod use_booking;
pub mod use_carousel;
pub mod use_modal;
pub mod use_section_tracker;
pub mod use_session;
pub mod use_toast;
