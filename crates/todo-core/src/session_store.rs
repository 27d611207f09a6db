//! Session Store
//!
//! Persists the login response, as the server sent it, under a fixed
//! storage key. Reads never fail: a missing, malformed or tokenless record
//! is simply "no session".

use tracing::{debug, warn};

use crate::domain::Session;
use crate::storage::KeyValueStorage;

/// Storage key holding the session record
pub const SESSION_STORAGE_KEY: &str = "userData";

#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, SESSION_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn load(&self) -> Option<Session> {
        let raw = self.storage.get(&self.key)?;
        let parsed = serde_json::from_str(&raw).and_then(Session::from_login_body);
        match parsed {
            Ok(session) if session.has_token() => Some(session),
            Ok(_) => {
                debug!(key = %self.key, "stored session has no token");
                None
            }
            Err(err) => {
                warn!(key = %self.key, %err, "ignoring malformed session record");
                None
            }
        }
    }

    /// Overwrite the stored record. Failures are logged; the in-memory
    /// session stays valid for the rest of the page's lifetime.
    pub fn save(&self, session: &Session) {
        let raw = match session.to_record().and_then(|record| serde_json::to_string(&record)) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(%err, "failed to serialize session");
                return;
            }
        };
        if let Err(err) = self.storage.set(&self.key, &raw) {
            warn!(%err, "failed to persist session");
        }
    }

    pub fn clear(&self) {
        if let Err(err) = self.storage.remove(&self.key) {
            warn!(%err, "failed to clear session");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Profile, UserType};
    use crate::storage::MemoryStorage;

    fn session(token: &str) -> Session {
        Session::new(
            token,
            Profile {
                id: "u1".into(),
                name: "Ann".into(),
                email: "a@b.com".into(),
                username: "ann".into(),
                user_type: UserType::Admin,
            },
        )
    }

    #[test]
    fn test_round_trip_across_instances() {
        let storage = MemoryStorage::new();
        SessionStore::new(storage.clone()).save(&session("tok-1"));

        let reloaded = SessionStore::new(storage).load();
        assert_eq!(reloaded, Some(session("tok-1")));
    }

    #[test]
    fn test_persisted_shape_is_login_envelope() {
        let storage = MemoryStorage::new();
        SessionStore::new(storage.clone()).save(&session("tok-1"));

        let raw = storage.get(SESSION_STORAGE_KEY).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["data"]["token"], "tok-1");
        assert_eq!(value["data"]["user"]["userType"], "admin");
    }

    #[test]
    fn test_login_body_persisted_unchanged() {
        let body = serde_json::json!({
            "success": true,
            "message": "Login ok",
            "data": {
                "token": "abc",
                "user": {"id": "u1", "name": "Ann", "email": "a@b.com",
                         "username": "ann", "userType": "admin",
                         "createdAt": "2024-05-01T10:00:00Z"}
            }
        });
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        store.save(&Session::from_login_body(body.clone()).unwrap());

        let raw = storage.get(SESSION_STORAGE_KEY).unwrap();
        let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, body);

        // Saving what was loaded keeps the body intact
        let reloaded = store.load().unwrap();
        assert_eq!(reloaded.user.name, "Ann");
        store.save(&reloaded);
        let raw = storage.get(SESSION_STORAGE_KEY).unwrap();
        assert_eq!(serde_json::from_str::<serde_json::Value>(&raw).unwrap(), body);
    }

    #[test]
    fn test_absent_malformed_and_tokenless_load_as_none() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        assert_eq!(store.load(), None);

        storage.set(SESSION_STORAGE_KEY, "{not json").unwrap();
        assert_eq!(store.load(), None);

        storage.set(SESSION_STORAGE_KEY, "{}").unwrap();
        assert_eq!(store.load(), None);

        storage
            .set(SESSION_STORAGE_KEY, r#"{"data":{"token":"","user":{}}}"#)
            .unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_clear_removes_record() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        store.save(&session("tok-1"));
        store.clear();
        assert!(storage.is_empty());
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_custom_key() {
        let storage = MemoryStorage::new();
        SessionStore::with_key(storage.clone(), "other").save(&session("t"));
        assert!(storage.get("other").is_some());
        assert_eq!(SessionStore::new(storage).load(), None);
    }
}
