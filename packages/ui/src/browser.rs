//! Thin wrappers over the browser window.
//!
//! Off the browser (tests, native builds) these only log, so the flows that
//! call them stay runnable everywhere.

/// Show a blocking `window.alert`.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_err() {
                tracing::warn!("alert failed: {message}");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::info!("alert: {message}");
}

/// Full-page navigation to a path served outside this app.
pub fn redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(path) {
                tracing::error!("Failed to redirect to {path}: {e:?}");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::info!("redirect: {path}");
}

/// `window.location.origin`, empty off the browser.
pub fn origin() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

/// Write an error line straight to the browser console.
pub fn console_error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    tracing::error!("{message}");
}
