use booking_shared::{SessionStore, StorageError};
use web_sys::{window, Storage};

fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

/// `window.sessionStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        session_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = session_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let storage = session_storage().ok_or(StorageError::Unavailable)?;
        storage
            .remove_item(key)
            .map_err(|_| StorageError::Remove(key.to_string()))
    }

    fn clear(&self) -> Result<(), StorageError> {
        let storage = session_storage().ok_or(StorageError::Unavailable)?;
        storage.clear().map_err(|_| StorageError::Clear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booking_shared::storage::keys;
    use booking_shared::{BookingController, GuestSession};
    use chrono::NaiveDate;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_set_get_remove() {
        let store = BrowserSessionStore;
        store.set(keys::ADULTS, "4").unwrap();
        assert_eq!(store.get(keys::ADULTS).as_deref(), Some("4"));
        store.remove(keys::ADULTS).unwrap();
        assert_eq!(store.get(keys::ADULTS), None);
    }

    #[wasm_bindgen_test]
    fn test_controller_rehydrates_from_browser_storage() {
        let store = BrowserSessionStore;
        store.clear().unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 2, 26).unwrap();

        let mut booking = BookingController::rehydrate(store, today);
        booking.select_date(NaiveDate::from_ymd_opt(2026, 3, 10).unwrap());
        booking.select_date(NaiveDate::from_ymd_opt(2026, 3, 12).unwrap());
        booking.select_room(1, "Deluxe", 10000.0);

        let reloaded = BookingController::rehydrate(store, today);
        assert_eq!(reloaded.total(), 40000.0);
        assert!(!GuestSession::load(&store).is_logged_in);
        store.clear().unwrap();
    }
}
