// ============================================================================
// SESSION SERVICE - token + user persistence
// ============================================================================
// Browser storage sits behind `SessionStorage` so the rest of the app (and
// the tests) never touch localStorage directly.
// ============================================================================

use std::rc::Rc;

use crate::models::{Session, User};
use crate::utils::{storage, STORAGE_KEY_TOKEN, STORAGE_KEY_USER};

/// Synchronous key/value backend for the session
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str);
}

/// `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalSessionStorage;

impl SessionStorage for LocalSessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        storage::read_raw(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        storage::write_raw(key, value)
    }

    fn remove(&self, key: &str) {
        storage::remove(key);
    }
}

#[derive(Clone)]
pub struct SessionService {
    storage: Rc<dyn SessionStorage>,
}

impl PartialEq for SessionService {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.storage, &other.storage)
    }
}

impl SessionService {
    pub fn new(storage: Rc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    pub fn browser() -> Self {
        Self::new(Rc::new(LocalSessionStorage))
    }

    pub fn token(&self) -> Option<String> {
        self.storage
            .get(STORAGE_KEY_TOKEN)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }

    pub fn user(&self) -> Option<User> {
        let raw = self.storage.get(STORAGE_KEY_USER)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("⚠️ Stored user record is unreadable: {}", e);
                None
            }
        }
    }

    /// Current session; a token alone is enough, the user record is optional
    pub fn load(&self) -> Option<Session> {
        let access_token = self.token()?;
        Some(Session {
            access_token,
            user: self.user().unwrap_or_default(),
        })
    }

    /// Replaces whatever session was stored
    pub fn save(&self, session: &Session) -> Result<(), String> {
        let user_json = serde_json::to_string(&session.user)
            .map_err(|e| format!("Could not serialize user: {}", e))?;
        self.storage.set(STORAGE_KEY_TOKEN, &session.access_token)?;
        self.storage.set(STORAGE_KEY_USER, &user_json)?;
        Ok(())
    }

    /// Refreshes the stored user after a profile fetch, keeping the token
    pub fn update_user(&self, user: &User) -> Result<(), String> {
        let user_json = serde_json::to_string(user)
            .map_err(|e| format!("Could not serialize user: {}", e))?;
        self.storage.set(STORAGE_KEY_USER, &user_json)
    }

    pub fn clear(&self) {
        self.storage.remove(STORAGE_KEY_USER);
        self.storage.remove(STORAGE_KEY_TOKEN);
    }
}

#[cfg(test)]
pub use memory::MemorySessionStorage;

#[cfg(test)]
mod memory {
    use super::SessionStorage;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    pub struct MemorySessionStorage {
        items: RefCell<HashMap<String, String>>,
    }

    impl SessionStorage for MemorySessionStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), String> {
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) {
            self.items.borrow_mut().remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> (Rc<MemorySessionStorage>, SessionService) {
        let storage = Rc::new(MemorySessionStorage::default());
        (storage.clone(), SessionService::new(storage))
    }

    fn session() -> Session {
        Session {
            access_token: "jwt-123".to_string(),
            user: User {
                username: "hr".to_string(),
                email: "hr@acme.io".to_string(),
                role: "HR Admin".to_string(),
                ..User::default()
            },
        }
    }

    #[test]
    fn save_then_load() {
        let (storage, service) = service();
        assert!(service.load().is_none());

        service.save(&session()).unwrap();

        assert_eq!(storage.get(STORAGE_KEY_TOKEN).as_deref(), Some("jwt-123"));
        assert_eq!(service.load(), Some(session()));
    }

    #[test]
    fn relogin_replaces_session() {
        let (_, service) = service();
        service.save(&session()).unwrap();

        let mut other = session();
        other.access_token = "jwt-456".to_string();
        other.user.username = "ops".to_string();
        service.save(&other).unwrap();

        assert_eq!(service.load(), Some(other));
    }

    #[test]
    fn clear_removes_everything() {
        let (storage, service) = service();
        service.save(&session()).unwrap();
        service.clear();
        assert!(service.load().is_none());
        assert!(storage.get(STORAGE_KEY_USER).is_none());
    }

    #[test]
    fn token_without_user_still_authenticates() {
        let (storage, service) = service();
        storage.set(STORAGE_KEY_TOKEN, "bare").unwrap();
        storage.set(STORAGE_KEY_USER, "{not json").unwrap();
        let loaded = service.load().unwrap();
        assert_eq!(loaded.access_token, "bare");
        assert_eq!(loaded.user, User::default());
    }

    #[test]
    fn blank_token_is_no_session() {
        let (storage, service) = service();
        storage.set(STORAGE_KEY_TOKEN, "  ").unwrap();
        assert!(service.load().is_none());
    }
}
