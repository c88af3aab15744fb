// SPDX-License-Identifier: MIT OR Apache-2.0

//! Browser implementations of the theme and newsletter collaborators.

use acme_types::{
    ColorSchemeSource, EmailAddress, PreferenceStore, StorageError, SubscriptionNotifier,
    ThemeMode, ThemePreference, ThemeSurface,
};
use wasm_bindgen::prelude::*;
use web_sys::{MediaQueryList, Storage};

pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Class toggled on `<html>` while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

pub type BrowserThemePreference =
    ThemePreference<LocalStorageStore, MediaQueryColorScheme, DocumentRoot>;

pub fn browser_theme() -> BrowserThemePreference {
    ThemePreference::new(LocalStorageStore, MediaQueryColorScheme, DocumentRoot)
}

fn js_error(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(|e| StorageError::Unavailable(js_error(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read {
                key: key.to_string(),
                reason: js_error(&e),
            })
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: js_error(&e),
            })
    }
}

fn prefers_dark_query() -> Option<MediaQueryList> {
    web_sys::window()?.match_media(PREFERS_DARK_QUERY).ok().flatten()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MediaQueryColorScheme;

impl ColorSchemeSource for MediaQueryColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        prefers_dark_query().map(|mql| mql.matches())
    }
}

/// The `<html>` element's class list.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRoot;

impl ThemeSurface for DocumentRoot {
    fn apply(&self, mode: ThemeMode) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        if let Err(e) = root
            .class_list()
            .toggle_with_force(DARK_CLASS, mode.is_dark())
        {
            log::warn!("failed to apply {mode} theme: {}", js_error(&e));
        }
    }
}

/// Confirms a sign-up with a blocking `window.alert`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl SubscriptionNotifier for AlertNotifier {
    fn notify(&self, email: &EmailAddress) {
        if let Some(win) = web_sys::window() {
            if let Err(e) = win.alert_with_message(&format!("Subscribed: {email}")) {
                log::warn!("failed to show subscription alert: {}", js_error(&e));
            }
        }
    }
}
