pub mod json_store;
pub mod memory;
pub mod schema;

use std::io;

use thiserror::Error;

pub use json_store::JsonStore;
pub use memory::MemoryStore;

#[derive(Debug, Error)]
#[error("store I/O failed for key '{key}'")]
pub struct StoreError {
    pub key: String,
    #[source]
    pub source: io::Error,
}

impl StoreError {
    pub fn new(key: &str, source: io::Error) -> Self {
        Self {
            key: key.to_string(),
            source,
        }
    }
}

/// Durable string values under string keys. Each call stands alone: there is
/// no transaction spanning a `get` and a later `set`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the whole value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}
