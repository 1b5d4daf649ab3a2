//! Durable key-value storage for the session credential and user record.
//!
//! Browser builds read and write `window.localStorage`; native builds and
//! unit tests use an in-memory map so the session lifecycle stays testable
//! off the browser. Storage failures are treated as absent values on read
//! and ignored on write.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Handle to the durable key-value store backing the session.
///
/// `Send + Sync` so it can live in a Leptos context and be captured by view
/// closures; all access still happens on the single UI thread.
#[derive(Clone, Debug)]
pub enum Store {
    /// `window.localStorage`, available in the browser only.
    #[cfg(feature = "csr")]
    Browser,
    /// In-memory map used on native targets and in tests.
    Memory(Arc<Mutex<HashMap<String, String>>>),
}

impl Store {
    /// The store for the current target: browser-backed under `csr`,
    /// in-memory otherwise.
    pub fn for_target() -> Self {
        #[cfg(feature = "csr")]
        {
            Store::Browser
        }
        #[cfg(not(feature = "csr"))]
        {
            Store::memory()
        }
    }

    /// A fresh, empty in-memory store.
    pub fn memory() -> Self {
        Store::Memory(Arc::new(Mutex::new(HashMap::new())))
    }

    /// Read a value, `None` when absent or unreadable.
    pub fn get(&self, key: &str) -> Option<String> {
        match self {
            #[cfg(feature = "csr")]
            Store::Browser => local_storage().and_then(|s| s.get_item(key).ok().flatten()),
            Store::Memory(map) => lock(map).get(key).cloned(),
        }
    }

    /// Write a value.
    pub fn set(&self, key: &str, value: &str) {
        match self {
            #[cfg(feature = "csr")]
            Store::Browser => {
                if let Some(storage) = local_storage() {
                    let _ = storage.set_item(key, value);
                }
            }
            Store::Memory(map) => {
                lock(map).insert(key.to_owned(), value.to_owned());
            }
        }
    }

    /// Remove a value. Removing an absent key is a no-op.
    pub fn remove(&self, key: &str) {
        match self {
            #[cfg(feature = "csr")]
            Store::Browser => {
                if let Some(storage) = local_storage() {
                    let _ = storage.remove_item(key);
                }
            }
            Store::Memory(map) => {
                lock(map).remove(key);
            }
        }
    }
}

fn lock(map: &Mutex<HashMap<String, String>>) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
    map.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
