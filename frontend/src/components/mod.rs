pub mod calendar;
pub mod carousel;
pub mod cart;
pub mod guest_selector;
pub mod header;
pub mod login_modal;
pub mod modal;
pub mod reveal;
pub mod room_card;
pub mod scroll_indicator;
pub mod toast;

pub use header::Header;
pub use login_modal::LoginModal;
pub use toast::ToastView;
