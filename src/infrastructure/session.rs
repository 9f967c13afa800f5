use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Process-wide key/value session state with an explicit lifecycle:
/// `init` loads whatever was persisted at startup, `set`/`remove` mutate
/// single entries, `clear` wipes everything (logout).
///
/// Keys and values are opaque to the core; the UI layer owns their meaning
/// and receives the store by injection rather than as ambient global state.
pub struct SessionStore {
    values: Mutex<HashMap<String, String>>,
}

impl SessionStore {
    pub fn init(seed: HashMap<String, String>) -> Self {
        Self {
            values: Mutex::new(seed),
        }
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.lock().insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    pub fn remove(&self, key: &str) -> Option<String> {
        self.lock().remove(key)
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::init(HashMap::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_seeds_the_store() {
        let seed = HashMap::from([("sales_app_user".to_string(), "amy".to_string())]);

        let store = SessionStore::init(seed);

        assert_eq!(store.get("sales_app_user").as_deref(), Some("amy"));
    }

    #[test]
    fn set_get_remove_behave_like_a_map() {
        let store = SessionStore::default();

        store.set("sales_app_user", "ben");
        assert_eq!(store.get("sales_app_user").as_deref(), Some("ben"));

        assert_eq!(store.remove("sales_app_user").as_deref(), Some("ben"));
        assert_eq!(store.get("sales_app_user"), None);
        assert_eq!(store.remove("sales_app_user"), None);
    }

    #[test]
    fn clear_wipes_every_entry() {
        let store = SessionStore::default();
        store.set("sales_app_user", "cara");
        store.set("theme", "dark");

        store.clear();

        assert_eq!(store.get("sales_app_user"), None);
        assert_eq!(store.get("theme"), None);
    }
}
