use thiserror::Error;
use web_sys::{window, Storage};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("no window available")]
    NoWindow,
    #[error("localStorage is unavailable")]
    Unavailable,
    #[error("{op}() threw for key {key}")]
    Threw { op: &'static str, key: String },
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    // Looked up per call, localStorage can be missing or throw.
    fn storage() -> Result<Storage, StorageError> {
        let window = window().ok_or(StorageError::NoWindow)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            _ => Err(StorageError::Unavailable),
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?.get_item(key).map_err(|_| StorageError::Threw {
            op: "get_item",
            key: key.to_string(),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?.set_item(key, value).map_err(|_| StorageError::Threw {
            op: "set_item",
            key: key.to_string(),
        })
    }
}

#[cfg(test)]
pub mod memory {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Clone, Debug, Default)]
    pub struct MemoryStore {
        items: Rc<RefCell<HashMap<String, String>>>,
        writes: Rc<RefCell<usize>>,
    }

    impl MemoryStore {
        pub fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store.items.borrow_mut().insert(key.to_string(), value.to_string());
            store
        }

        pub fn writes(&self) -> usize {
            *self.writes.borrow()
        }

        pub fn clear(&self) {
            self.items.borrow_mut().clear();
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.items.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            *self.writes.borrow_mut() += 1;
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn clones_share_items() {
        let store = MemoryStore::default();
        let reloaded = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(reloaded.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(reloaded.writes(), 1);
    }

    #[test]
    fn storage_errors_describe_the_failure() {
        let err = StorageError::Threw { op: "set_item", key: "hasSeenDisclaimer".to_string() };
        assert_eq!(err.to_string(), "set_item() threw for key hasSeenDisclaimer");
    }
}
