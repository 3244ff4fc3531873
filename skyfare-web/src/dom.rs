//! Thin wrappers over the browser globals the booking pages touch.
use js_sys::Promise;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Storage, Window};

/// The page's `window`.
///
/// # Errors
/// Fails when the code is not running inside a browser tab.
pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no browser window"))
}

/// Text for a thrown JS value: the `Error` message, a thrown string, or its debug form.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Resolve after `ms` milliseconds. The timeout calls the promise's
/// resolver directly, so no closure has to be kept alive.
///
/// # Errors
/// Fails when there is no window or the timeout cannot be scheduled.
#[allow(clippy::future_not_send)] // `JsFuture` is not `Send`.
pub async fn sleep_ms(ms: i32) -> Result<(), JsValue> {
    let window = window()?;
    let mut scheduled = Ok(0);
    let promise = Promise::new(&mut |resolve, _reject| {
        scheduled = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
    });
    scheduled?;
    JsFuture::from(promise).await.map(drop)
}

/// The tab's `sessionStorage`, where page hand-off records live.
///
/// # Errors
/// Fails when storage is disabled, for example in some private browsing modes.
pub fn session_storage() -> Result<Storage, JsValue> {
    window()?
        .session_storage()?
        .ok_or_else(|| JsValue::from_str("sessionStorage disabled"))
}

/// Load `href` as a new document.
///
/// # Errors
/// Fails when the browser refuses the navigation.
pub fn assign_location(href: &str) -> Result<(), JsValue> {
    window()?.location().set_href(href)
}

/// Open the print dialog for the ticket.
///
/// # Errors
/// Fails when the browser blocks printing.
pub fn print() -> Result<(), JsValue> {
    window()?.print()
}
