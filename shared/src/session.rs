//! Logged-in guest identity, mirrored in session storage.

use crate::storage::{keys, log_storage_failure, SessionStore};
use crate::{AuthCheckResponse, AuthResponse};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuestSession {
    pub guest_id: Option<i64>,
    pub guest_name: Option<String>,
    pub is_logged_in: bool,
}

impl GuestSession {
    pub fn load<S: SessionStore + ?Sized>(store: &S) -> Self {
        let is_logged_in = store.get(keys::IS_LOGGED_IN).as_deref() == Some("true");
        let guest_id = store
            .get(keys::GUEST_ID)
            .and_then(|raw| raw.trim().parse::<i64>().ok());
        let guest_name = store.get(keys::GUEST_NAME).filter(|name| !name.is_empty());
        Self {
            guest_id,
            guest_name,
            is_logged_in,
        }
    }

    /// Store the identity returned by login or registration
    pub fn login<S: SessionStore + ?Sized>(store: &S, auth: &AuthResponse) -> Self {
        log_storage_failure("store guest name", store.set(keys::GUEST_NAME, &auth.guest_name));
        log_storage_failure("store guest id", store.set(keys::GUEST_ID, &auth.guest_id.to_string()));
        log_storage_failure("store login flag", store.set(keys::IS_LOGGED_IN, "true"));
        log::info!("guest {} logged in", auth.guest_id);
        Self {
            guest_id: Some(auth.guest_id),
            guest_name: Some(auth.guest_name.clone()),
            is_logged_in: true,
        }
    }

    /// Forget the guest identity; the booking selection is left alone
    pub fn logout<S: SessionStore + ?Sized>(store: &S) -> Self {
        log_storage_failure("remove guest name", store.remove(keys::GUEST_NAME));
        log_storage_failure("remove guest id", store.remove(keys::GUEST_ID));
        log_storage_failure("store login flag", store.set(keys::IS_LOGGED_IN, "false"));
        log::info!("guest logged out");
        Self::default()
    }

    /// Align local state with `GET /api/auth/check`. A server-side logout
    /// wipes the whole store, since any leftover selection belongs to a
    /// session that no longer exists.
    pub fn sync_from_check<S: SessionStore + ?Sized>(store: &S, check: &AuthCheckResponse) -> Self {
        match (check.is_logged_in, check.guest_id) {
            (true, Some(guest_id)) => Self::login(
                store,
                &AuthResponse {
                    guest_name: check.guest_name.clone().unwrap_or_default(),
                    guest_id,
                },
            ),
            _ => {
                log_storage_failure("clear expired session", store.clear());
                Self::default()
            }
        }
    }

    /// Replace the display name after a profile update
    pub fn rename<S: SessionStore + ?Sized>(&mut self, store: &S, names: &str, surnames: &str) {
        let full_name = format!("{} {}", names.trim(), surnames.trim());
        log_storage_failure("store guest name", store.set(keys::GUEST_NAME, &full_name));
        self.guest_name = Some(full_name);
    }

    pub fn initials(&self) -> String {
        initials(self.guest_name.as_deref().unwrap_or("User"))
    }
}

/// Navbar badge letters: first letter of the first and last word
pub fn initials(full_name: &str) -> String {
    let words: Vec<&str> = full_name.split_whitespace().collect();
    let first_letter = |word: &str| word.chars().next().map(|c| c.to_uppercase().to_string());
    match words.as_slice() {
        [] => String::new(),
        [only] => first_letter(only).unwrap_or_default(),
        [first, .., last] => {
            let mut letters = first_letter(first).unwrap_or_default();
            letters.push_str(&first_letter(last).unwrap_or_default());
            letters
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySessionStore;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Kenji Tanaka"), "KT");
        assert_eq!(initials("  aiko  "), "A");
        assert_eq!(initials("María José de la Cruz"), "MC");
        assert_eq!(initials(""), "");
        assert_eq!(GuestSession::default().initials(), "U");
    }

    #[test]
    fn test_login_and_load() {
        let store = MemorySessionStore::new();
        let auth = AuthResponse {
            guest_name: "Kenji Tanaka".to_string(),
            guest_id: 42,
        };
        let session = GuestSession::login(&store, &auth);
        assert!(session.is_logged_in);
        assert_eq!(GuestSession::load(&store), session);
        assert_eq!(store.get(keys::IS_LOGGED_IN).as_deref(), Some("true"));
    }

    #[test]
    fn test_logout_keeps_booking_keys() {
        let store = MemorySessionStore::new();
        store.set(keys::CHECK_IN, "2026-03-10").unwrap();
        GuestSession::login(
            &store,
            &AuthResponse {
                guest_name: "Aiko".to_string(),
                guest_id: 1,
            },
        );
        let session = GuestSession::logout(&store);
        assert!(!session.is_logged_in);
        assert_eq!(store.get(keys::GUEST_ID), None);
        assert_eq!(store.get(keys::IS_LOGGED_IN).as_deref(), Some("false"));
        assert_eq!(store.get(keys::CHECK_IN).as_deref(), Some("2026-03-10"));
    }

    #[test]
    fn test_expired_server_session_clears_store() {
        let store = MemorySessionStore::new();
        store.set(keys::ROOM_ID, "3").unwrap();
        let check = AuthCheckResponse {
            is_logged_in: false,
            guest_name: None,
            guest_id: None,
        };
        let session = GuestSession::sync_from_check(&store, &check);
        assert_eq!(session, GuestSession::default());
        assert!(store.is_empty());
    }

    #[test]
    fn test_rename_updates_store() {
        let store = MemorySessionStore::new();
        let mut session = GuestSession::default();
        session.rename(&store, " Kenji ", "Tanaka");
        assert_eq!(session.guest_name.as_deref(), Some("Kenji Tanaka"));
        assert_eq!(store.get(keys::GUEST_NAME).as_deref(), Some("Kenji Tanaka"));
    }
}
