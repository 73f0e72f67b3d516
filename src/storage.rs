//! Durable key-value persistence.
//!
//! [`KeyValueStore`] is the raw string store (`window.localStorage` in the
//! browser, [`MemoryStorage`] in tests). [`JsonStore`] layers JSON on top
//! and swallows every failure: writes report `false`, reads report `None`,
//! and the cause goes to the log.

use std::cell::RefCell;
use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{js_error_message, StorageError};

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

/// `window.localStorage`
#[derive(Debug, Clone)]
pub struct LocalStorage {
    inner: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let inner = window
            .local_storage()
            .map_err(|e| StorageError::Backend(js_error_message(&e)))?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { inner })
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner
            .get_item(key)
            .map_err(|e| StorageError::Backend(js_error_message(&e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // setItem throws a QuotaExceededError DOMException when full
        self.inner.set_item(key, value).map_err(|e| {
            let message = js_error_message(&e);
            if message.to_ascii_lowercase().contains("quota") {
                StorageError::QuotaExceeded(message)
            } else {
                StorageError::Backend(message)
            }
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.inner
            .remove_item(key)
            .map_err(|e| StorageError::Backend(js_error_message(&e)))
    }
}

/// In-memory store with an optional byte quota over keys plus values.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<BTreeMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(bytes: usize) -> Self {
        Self { items: RefCell::default(), quota: Some(bytes) }
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Raw stored text, bypassing JSON.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.borrow_mut();
        if let Some(quota) = self.quota {
            let used: usize = items
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            if used + key.len() + value.len() > quota {
                return Err(StorageError::QuotaExceeded(format!(
                    "setting '{}' would exceed {} bytes",
                    key, quota
                )));
            }
        }
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// JSON view over a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct JsonStore<S> {
    backend: S,
}

impl JsonStore<LocalStorage> {
    /// JSON store over `localStorage`, or `None` when the page has no
    /// storage (private mode, sandboxed iframe).
    pub fn local() -> Option<Self> {
        match LocalStorage::open() {
            Ok(backend) => Some(Self::new(backend)),
            Err(e) => {
                tracing::error!(error = %e, "Storage Error");
                None
            }
        }
    }
}

impl<S: KeyValueStore> JsonStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        let result = serde_json::to_string(value)
            .map_err(StorageError::from)
            .and_then(|text| self.backend.set_item(key, &text));
        report(key, result).is_some()
    }

    /// Missing keys, empty strings and undecodable text all read as `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let text = report(key, self.backend.get_item(key))??;
        if text.is_empty() {
            return None;
        }
        report(key, serde_json::from_str(&text).map_err(StorageError::from))
    }

    pub fn remove(&self, key: &str) -> bool {
        report(key, self.backend.remove_item(key)).is_some()
    }
}

fn report<T>(key: &str, result: Result<T, StorageError>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::error!(key, error = %e, "Storage Error");
            None
        }
    }
}
