//! Global page state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! Persistent values live in `localStorage` behind [`LocalStore`].

use gloo_timers::callback::Timeout;
use pf_core::{KeyValueStore, PageConfig, StoreError, Theme};
use std::cell::RefCell;

/// Central page state.
#[derive(Default)]
pub struct AppState {
    pub config: PageConfig,
    pub theme: Theme,
    /// Pending success-banner hide. Replacing it drops (cancels) the old one.
    pub banner_timer: Option<Timeout>,
}

// ── Thread-local singleton ──

thread_local! {
    static STATE: RefCell<AppState> = RefCell::new(AppState::default());
}

/// Run a closure with shared read access to the state.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&AppState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the state.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

// ── Convenience accessors ──

pub fn config() -> PageConfig {
    with(|s| s.config.clone())
}

pub fn set_config(config: PageConfig) {
    with_mut(|s| s.config = config);
}

pub fn theme() -> Theme {
    with(|s| s.theme)
}

pub fn set_theme(theme: Theme) {
    with_mut(|s| s.theme = theme);
}

pub fn replace_banner_timer(timer: Option<Timeout>) {
    // Drop the previous timer outside the borrow; cancelling calls into JS.
    let previous = with_mut(|s| std::mem::replace(&mut s.banner_timer, timer));
    drop(previous);
}

// ── localStorage ──

/// [`KeyValueStore`] over `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| StoreError::Unavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
    }
}

pub fn store() -> LocalStore {
    LocalStore
}
