//! `window.sessionStorage` behind the core [`SessionStore`] trait.
use crate::dom;
use skyfare_core::SessionStore;

#[derive(Debug, thiserror::Error)]
pub enum BrowserStorageError {
    #[error("sessionStorage unavailable: {0}")]
    Unavailable(String),
    #[error("storage error: {0}")]
    Operation(String),
}

/// Tab-scoped browser storage; cleared when the session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserSessionStore;

impl BrowserSessionStore {
    fn storage() -> Result<web_sys::Storage, BrowserStorageError> {
        dom::session_storage()
            .map_err(|e| BrowserStorageError::Unavailable(dom::js_error_message(&e)))
    }
}

impl SessionStore for BrowserSessionStore {
    type Error = BrowserStorageError;

    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| BrowserStorageError::Operation(dom::js_error_message(&e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| BrowserStorageError::Operation(dom::js_error_message(&e)))
    }

    fn remove_item(&self, key: &str) -> Result<(), Self::Error> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| BrowserStorageError::Operation(dom::js_error_message(&e)))
    }
}
