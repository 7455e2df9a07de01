//! Browser session: bearer token and UI locale.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token and locale are the only cross-page mutable state. One
//! `RwSignal<Session>` is provided at the app root; every read and write goes
//! through it and a [`SessionStore`], so pages never touch storage keys.
//!
//! TRADE-OFFS
//! ==========
//! SSR renders with a default, unloaded session. The real one is restored
//! after hydration, and route guards wait for `loaded` before redirecting.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::i18n::Locale;
use crate::net::types::LoginResponse;
use crate::util::storage;

pub const TOKEN_KEY: &str = "vaccitrack_access_token";
pub const TOKEN_TYPE_KEY: &str = "vaccitrack_token_type";
pub const LOCALE_KEY: &str = "vaccitrack_locale";

/// Key/value persistence behind the session.
pub trait SessionStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `localStorage`-backed store used by the app.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl SessionStore for BrowserStore {
    fn load(&self, key: &str) -> Option<String> {
        storage::load(key)
    }

    fn save(&self, key: &str, value: &str) {
        storage::save(key, value);
    }

    fn remove(&self, key: &str) {
        storage::remove(key);
    }
}

/// In-memory store for tests and non-browser contexts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl SessionStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub locale: Locale,
    /// False until restored from the store; guards must not redirect before then.
    pub loaded: bool,
}

impl Session {
    /// Rebuild the session from persisted values. An unknown locale code falls back to Arabic.
    pub fn restore(store: &dyn SessionStore) -> Self {
        let access_token = store.load(TOKEN_KEY).filter(|t| !t.trim().is_empty());
        let token_type = store.load(TOKEN_TYPE_KEY);
        let locale = store.load(LOCALE_KEY).and_then(|code| Locale::from_code(&code)).unwrap_or_default();
        Self { access_token, token_type, locale, loaded: true }
    }

    /// Persist the token returned by `POST /auth/login`.
    pub fn sign_in(&mut self, store: &dyn SessionStore, login: &LoginResponse) {
        store.save(TOKEN_KEY, &login.access_token);
        store.save(TOKEN_TYPE_KEY, &login.token_type);
        self.access_token = Some(login.access_token.clone());
        self.token_type = Some(login.token_type.clone());
        self.loaded = true;
    }

    /// Drop the token. The locale survives.
    pub fn sign_out(&mut self, store: &dyn SessionStore) {
        store.remove(TOKEN_KEY);
        store.remove(TOKEN_TYPE_KEY);
        self.access_token = None;
        self.token_type = None;
    }

    pub fn set_locale(&mut self, store: &dyn SessionStore, locale: Locale) {
        store.save(LOCALE_KEY, locale.code());
        self.locale = locale;
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// `Authorization` header value, when signed in.
    pub fn authorization(&self) -> Option<String> {
        self.access_token.as_ref().map(|token| format!("Bearer {token}"))
    }
}
