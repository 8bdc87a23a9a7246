//! # Flag Storage
//!
//! Storage abstraction for the usage flags. The browser build persists flags
//! in `window.localStorage`; tests and non-browser hosts use
//! [`MemoryFlagStore`]. Every operation returns a `Result` so callers decide
//! how to treat an unavailable store.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Errors raised by a flag store
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("Flag store is unavailable: {0}")]
    Unavailable(String),
    #[error("Failed to read flag '{key}': {reason}")]
    Read { key: String, reason: String },
    #[error("Failed to write flag '{key}': {reason}")]
    Write { key: String, reason: String },
}

/// Flat string key-value store with atomic single-key get and set
pub trait FlagStore {
    /// Read a value. `Ok(None)` means the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: FlagStore + ?Sized> FlagStore for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// In-process store, lost when the page goes away
#[derive(Debug, Default)]
pub struct MemoryFlagStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryFlagStore {
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

impl FlagStore for MemoryFlagStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use super::*;

    /// Store whose reads and/or writes always fail
    #[derive(Debug, Default)]
    pub struct FailingFlagStore {
        pub fail_reads: bool,
        pub fail_writes: bool,
        pub inner: MemoryFlagStore,
    }

    impl FailingFlagStore {
        pub fn broken() -> Self {
            Self { fail_reads: true, fail_writes: true, inner: MemoryFlagStore::new() }
        }
    }

    impl FlagStore for FailingFlagStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            if self.fail_reads {
                return Err(StoreError::Read { key: key.to_string(), reason: "quota exceeded".to_string() });
            }
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            if self.fail_writes {
                return Err(StoreError::Write { key: key.to_string(), reason: "quota exceeded".to_string() });
            }
            self.inner.set(key, value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_get_set() {
        let store = MemoryFlagStore::new();
        assert_eq!(store.get("used:2025-01-01:morning").unwrap(), None);

        store.set("used:2025-01-01:morning", "1").unwrap();
        assert_eq!(store.get("used:2025-01-01:morning").unwrap().as_deref(), Some("1"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_overwrites() {
        let store = MemoryFlagStore::new();
        store.set("k", "a").unwrap();
        store.set("k", "b").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("b"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_error_messages() {
        let err = StoreError::Read { key: "k".to_string(), reason: "denied".to_string() };
        assert_eq!(err.to_string(), "Failed to read flag 'k': denied");
        assert_eq!(StoreError::Unavailable("no window".to_string()).to_string(), "Flag store is unavailable: no window");
    }
}
