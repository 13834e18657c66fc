pub mod booking;
pub mod checkout;
pub mod facilities;
pub mod home;
pub mod my_reservations;
pub mod profile;
pub mod register;
pub mod rooms;
