//! Client-side persistence for the session token
//!
//! The token is an opaque string kept in localStorage under a fixed key. It
//! is written after a successful login and never cleared or checked here.

use std::cell::RefCell;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// localStorage key holding the session token
pub const TOKEN_STORAGE_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("localStorage not available")]
    Unavailable,

    #[error("Failed to write token: {0}")]
    Write(String),
}

/// Where the session token is written; nothing in the app reads it back
pub trait TokenStore {
    fn store_token(&self, token: &str) -> Result<(), StorageError>;
}

/// Browser localStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokenStore;

#[cfg(not(feature = "ssr"))]
impl LocalStorageTokenStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(not(feature = "ssr"))]
impl TokenStore for LocalStorageTokenStore {
    fn store_token(&self, token: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(TOKEN_STORAGE_KEY, token)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// SSR stub - there is no localStorage on the server
#[cfg(feature = "ssr")]
impl TokenStore for LocalStorageTokenStore {
    fn store_token(&self, _token: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

/// In-memory store, used in tests
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last token written, if any
    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }
}

impl TokenStore for MemoryTokenStore {
    fn store_token(&self, token: &str) -> Result<(), StorageError> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_starts_empty() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_memory_store_overwrites() {
        let store = MemoryTokenStore::new();
        store.store_token("first").unwrap();
        store.store_token("second").unwrap();

        assert_eq!(store.token().as_deref(), Some("second"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_local_storage_unavailable_on_server() {
        let store = LocalStorageTokenStore;

        assert_eq!(store.store_token("abc"), Err(StorageError::Unavailable));
    }
}
