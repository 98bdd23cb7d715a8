//! # Session token storage
//!
//! The backend issues an opaque bearer token at login. The client keeps it in
//! two places:
//!
//! | Location | Key | Written by |
//! |----------|-----|------------|
//! | `localStorage` | [`TOKEN_KEY`] | [`TokenStore::save`] |
//! | `document.cookie` | [`TOKEN_KEY`] (`path=/`) | [`TokenStore::save`] and the backend's login response |
//!
//! Reads prefer local storage and fall back to the cookie, so a session that
//! was established by the backend alone (cookie only) still authenticates
//! requests. There is no client-side expiry check: a token is only known to be
//! stale when the server answers `401`.
//!
//! The two locations are abstracted behind [`StorageArea`] and [`CookieJar`] so
//! the same store runs against the browser ([`crate::BrowserStorage`],
//! [`crate::BrowserCookies`]) or in memory ([`crate::MemoryStorage`],
//! [`crate::MemoryCookies`]).

use std::rc::Rc;

/// Key used for both the local-storage entry and the mirrored cookie.
pub const TOKEN_KEY: &str = "access_token";

const COOKIE_EPOCH: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// A string key/value area with `localStorage` semantics.
pub trait StorageArea {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// Access to the document's cookie string.
pub trait CookieJar {
    /// The raw `document.cookie` value: `"a=1; b=2"`.
    fn cookie_string(&self) -> String;
    /// Assign a single `name=value; attrs` cookie, like `document.cookie = ...`.
    fn set_cookie(&self, cookie: &str);
}

/// Reads and writes the session token.
#[derive(Clone)]
pub struct TokenStore {
    storage: Rc<dyn StorageArea>,
    cookies: Rc<dyn CookieJar>,
}

impl TokenStore {
    pub fn new(storage: impl StorageArea + 'static, cookies: impl CookieJar + 'static) -> Self {
        Self {
            storage: Rc::new(storage),
            cookies: Rc::new(cookies),
        }
    }

    /// Store backed by `window.localStorage` and `document.cookie`.
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    pub fn browser() -> Self {
        Self::new(crate::BrowserStorage, crate::BrowserCookies)
    }

    /// Store with no browser behind it. Used off-wasm and in tests.
    pub fn in_memory() -> Self {
        Self::new(crate::MemoryStorage::new(), crate::MemoryCookies::new())
    }

    /// Persist a freshly issued token.
    pub fn save(&self, token: &str) {
        self.storage.set_item(TOKEN_KEY, token);
        self.cookies
            .set_cookie(&format!("{TOKEN_KEY}={token}; path=/; SameSite=Lax"));
    }

    /// Current token: local storage first, then the cookie.
    pub fn get(&self) -> Option<String> {
        self.storage
            .get_item(TOKEN_KEY)
            .filter(|t| !t.is_empty())
            .or_else(|| cookie_value(&self.cookies.cookie_string(), TOKEN_KEY))
    }

    /// Forget the token in both locations.
    pub fn clear(&self) {
        self.storage.remove_item(TOKEN_KEY);
        self.cookies
            .set_cookie(&format!("{TOKEN_KEY}=; expires={COOKIE_EPOCH}; path=/;"));
    }
}

impl PartialEq for TokenStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.storage, &other.storage) && Rc::ptr_eq(&self.cookies, &other.cookies)
    }
}

/// Extract a cookie's value from a `document.cookie` string.
///
/// Returns `None` when the cookie is missing or empty.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryCookies, MemoryStorage};

    #[test]
    fn test_local_storage_wins_over_cookie() {
        let storage = MemoryStorage::new();
        let cookies = MemoryCookies::new();
        storage.set_item(TOKEN_KEY, "from-storage");
        cookies.set_cookie("access_token=from-cookie; path=/");

        let tokens = TokenStore::new(storage, cookies);
        assert_eq!(tokens.get().as_deref(), Some("from-storage"));
    }

    #[test]
    fn test_falls_back_to_cookie() {
        let cookies = MemoryCookies::new();
        cookies.set_cookie("theme=dark");
        cookies.set_cookie("access_token=abc.def.ghi; path=/");

        let tokens = TokenStore::new(MemoryStorage::new(), cookies);
        assert_eq!(tokens.get().as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_save_then_clear() {
        let tokens = TokenStore::in_memory();
        assert!(tokens.get().is_none());

        tokens.save("t1");
        assert_eq!(tokens.get().as_deref(), Some("t1"));

        tokens.clear();
        assert!(tokens.get().is_none());
    }

    #[test]
    fn test_clear_expires_mirrored_cookie() {
        let cookies = MemoryCookies::new();
        let tokens = TokenStore::new(MemoryStorage::new(), cookies.clone());
        tokens.save("t1");
        assert_eq!(cookie_value(&cookies.cookie_string(), TOKEN_KEY).as_deref(), Some("t1"));

        tokens.clear();
        assert!(cookie_value(&cookies.cookie_string(), TOKEN_KEY).is_none());
    }

    #[test]
    fn test_cookie_value_exact_name() {
        let raw = "xaccess_token=nope; access_token=yes; other=1";
        assert_eq!(cookie_value(raw, "access_token").as_deref(), Some("yes"));
        assert_eq!(cookie_value(raw, "missing"), None);
        assert_eq!(cookie_value("access_token=", "access_token"), None);
    }
}
