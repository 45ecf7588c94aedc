use crate::error::StoreError;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;

/// Logical key names in the persisted store.
pub mod keys {
    pub const THEME: &str = "theme";
    pub const FORM_SUBMISSIONS: &str = "formSubmissions";
    pub const VISITOR_COUNT: &str = "visitorCount";
    pub const LAST_VISIT: &str = "lastVisit";
}

/// String key/value storage surviving page reloads.
///
/// The page runs on a single thread, so implementations take `&self` and
/// use interior mutability where they need it.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

pub fn set_json<T: Serialize + ?Sized>(store: &impl KeyValueStore, key: &str, value: &T) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl InMemoryStore {
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

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_roundtrip() -> Result<(), StoreError> {
        let store = InMemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get(keys::THEME)?, None);

        store.set(keys::THEME, "dark")?;
        store.set(keys::THEME, "light")?;
        assert_eq!(store.get(keys::THEME)?.as_deref(), Some("light"));
        assert_eq!(store.len(), 1);
        Ok(())
    }

    #[test]
    fn set_json_stores_compact_json() -> Result<(), StoreError> {
        let store = InMemoryStore::new();
        set_json(&store, "numbers", &[1, 2, 3])?;
        assert_eq!(store.get("numbers")?.as_deref(), Some("[1,2,3]"));
        Ok(())
    }
}
