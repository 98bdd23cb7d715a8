//! # Browser-backed token locations
//!
//! [`BrowserStorage`] and [`BrowserCookies`] are the [`StorageArea`] and
//! [`CookieJar`] implementations used on the **web platform**. Both are
//! zero-size handles that look up `window.localStorage` / `document` on every
//! call; the browser keeps those objects alive, so nothing is cached here.
//!
//! ## Error handling
//!
//! Storage can be unavailable (private browsing, sandboxed iframes). Reads then
//! return `None` and writes are dropped with a warning. The token is a
//! convenience copy of what the backend already tracks through its cookie, so
//! losing it degrades to "logged out" rather than breaking the page.

use crate::token::{CookieJar, StorageArea};
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, Storage};

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl StorageArea for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    tracing::warn!("localStorage rejected write for {key}");
                }
            }
            None => tracing::warn!("localStorage unavailable, {key} not persisted"),
        }
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// `document.cookie`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCookies;

impl BrowserCookies {
    fn document() -> Option<HtmlDocument> {
        web_sys::window()?
            .document()?
            .dyn_into::<HtmlDocument>()
            .ok()
    }
}

impl CookieJar for BrowserCookies {
    fn cookie_string(&self) -> String {
        Self::document()
            .and_then(|doc| doc.cookie().ok())
            .unwrap_or_default()
    }

    fn set_cookie(&self, cookie: &str) {
        if let Some(doc) = Self::document() {
            if doc.set_cookie(cookie).is_err() {
                tracing::warn!("document.cookie rejected write");
            }
        }
    }
}
