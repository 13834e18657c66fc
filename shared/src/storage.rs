//! # Session storage abstraction
//!
//! The booking flow survives page reloads by mirroring its state into the
//! tab's session storage. The domain only talks to the [`SessionStore`]
//! trait, so the browser-backed store lives in the frontend crate and tests
//! use [`MemorySessionStore`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StorageError;

/// Storage keys shared with the server-rendered pages
pub mod keys {
    pub const GUEST_ID: &str = "guestId";
    pub const GUEST_NAME: &str = "guestName";
    pub const IS_LOGGED_IN: &str = "isLoggedIn";
    pub const CHECK_IN: &str = "booking_checkin";
    pub const CHECK_OUT: &str = "booking_checkout";
    pub const ADULTS: &str = "booking_adults";
    pub const ROOM_ID: &str = "booking_roomId";
    pub const ROOM_NAME: &str = "booking_roomName";
    pub const ROOM_PRICE: &str = "booking_roomPrice";
    pub const CHECKOUT_DRAFT: &str = "checkout_draft";
}

/// Tab-scoped string key/value store
pub trait SessionStore {
    /// Read a value, `None` when the key is absent or storage is unreadable
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a single key; removing an absent key is not an error
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Drop every key
    fn clear(&self) -> Result<(), StorageError>;
}

/// In-memory store. Clones share the same map, the way every script on a
/// page sees the same `sessionStorage`.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.entries.borrow_mut().clear();
        Ok(())
    }
}

/// Write or remove `key` depending on whether there is a value
pub fn set_or_remove<S: SessionStore + ?Sized>(
    store: &S,
    key: &str,
    value: Option<String>,
) -> Result<(), StorageError> {
    match value {
        Some(value) => store.set(key, &value),
        None => store.remove(key),
    }
}

/// Persistence is best effort: a failed write is logged and the in-memory
/// state stays authoritative.
pub(crate) fn log_storage_failure(context: &str, result: Result<(), StorageError>) {
    if let Err(e) = result {
        log::warn!("{}: {}", context, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_basic_operations() {
        let store = MemorySessionStore::new();
        assert!(store.is_empty());

        store.set(keys::GUEST_NAME, "Kenji Tanaka").unwrap();
        assert_eq!(store.get(keys::GUEST_NAME), Some("Kenji Tanaka".to_string()));

        store.set(keys::GUEST_NAME, "Aiko").unwrap();
        assert_eq!(store.get(keys::GUEST_NAME), Some("Aiko".to_string()));

        store.remove(keys::GUEST_NAME).unwrap();
        assert_eq!(store.get(keys::GUEST_NAME), None);
        store.remove(keys::GUEST_NAME).unwrap();
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemorySessionStore::new();
        let other = store.clone();
        store.set(keys::ADULTS, "3").unwrap();
        assert_eq!(other.get(keys::ADULTS), Some("3".to_string()));

        other.clear().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_or_remove() {
        let store = MemorySessionStore::new();
        set_or_remove(&store, keys::CHECK_OUT, Some("2026-03-12".to_string())).unwrap();
        assert_eq!(store.len(), 1);
        set_or_remove(&store, keys::CHECK_OUT, None).unwrap();
        assert!(store.is_empty());
    }
}
