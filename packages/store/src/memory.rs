use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::token::{CookieJar, StorageArea};

/// In-memory `localStorage` stand-in for tests and non-browser targets.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageArea for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.to_string(), value.to_string());
        }
    }

    fn remove_item(&self, key: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.remove(key);
        }
    }
}

/// In-memory cookie jar that honours expiry the way a browser would for
/// `expires=<epoch>` and `max-age=0`.
#[derive(Clone, Debug, Default)]
pub struct MemoryCookies {
    jar: Arc<Mutex<Vec<(String, String)>>>,
}

impl MemoryCookies {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CookieJar for MemoryCookies {
    fn cookie_string(&self) -> String {
        let Ok(jar) = self.jar.lock() else {
            return String::new();
        };
        jar.iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn set_cookie(&self, cookie: &str) {
        let mut parts = cookie.split(';').map(str::trim);
        let Some((name, value)) = parts.next().and_then(|p| p.split_once('=')) else {
            return;
        };
        let expired = parts.any(|attr| {
            let attr = attr.to_ascii_lowercase();
            attr.starts_with("expires=thu, 01 jan 1970") || attr == "max-age=0"
        });

        let Ok(mut jar) = self.jar.lock() else {
            return;
        };
        jar.retain(|(existing, _)| existing != name);
        if !expired {
            jar.push((name.to_string(), value.to_string()));
        }
    }
}
