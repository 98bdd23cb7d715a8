pub mod config;
pub mod token;

mod memory;
pub use memory::{MemoryCookies, MemoryStorage};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod browser;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use browser::{BrowserCookies, BrowserStorage};

pub use config::ClientConfig;
pub use token::{cookie_value, CookieJar, StorageArea, TokenStore, TOKEN_KEY};
