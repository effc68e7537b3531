//! Durable key→string storage behind the session mirror.
//!
//! The browser backend wraps `localStorage` and requires a browser
//! environment, so it is gated behind `#[cfg(feature = "hydrate")]` like the
//! rest of the web-sys code. `MemoryStorage` is a shared in-process backend
//! used by tests and server-side rendering, where no durable storage exists.
//!
//! Write and remove failures (storage unavailable, quota exceeded) are
//! ignored: the session layer treats a broken storage environment as fatal
//! and out of scope.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Durable key→string mapping used to mirror the session.
pub trait SessionStorage {
    /// Read a value, or `None` if the key is absent or storage is unusable.
    fn get(&self, key: &str) -> Option<String>;
    /// Write a value.
    fn set(&self, key: &str, value: &str);
    /// Delete a key. Deleting an absent key is a no-op.
    fn remove(&self, key: &str);
}

/// `localStorage`-backed storage. Inert outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window()?;
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(value) = storage.get_item(key) {
                    return value;
                }
            }
            None
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(key, value);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.remove_item(key);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory storage backend.
///
/// Clones share the same underlying map, so a store rebuilt from a clone of
/// its storage sees everything the first store persisted. That mirrors how
/// `localStorage` survives a page reload.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
