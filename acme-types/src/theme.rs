/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Light/dark theme preference.
//!
//! The resolved mode comes from, in order: a stored preference, the
//! platform's ambient color-scheme signal, and finally [`ThemeMode::Light`].
//! Persistence is best-effort: storage failures are logged and swallowed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key under which the preference is persisted.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme mode: {0:?}")]
pub struct UnknownThemeMode(pub String);

impl FromStr for ThemeMode {
    type Err = UnknownThemeMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(UnknownThemeMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read {key:?}: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write {key:?}: {reason}")]
    Write { key: String, reason: String },
}

/// A small synchronous key-value store (`localStorage` in the browser).
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// The platform's "prefers dark color scheme" signal.
///
/// `None` means the platform does not report a preference.
pub trait ColorSchemeSource {
    fn prefers_dark(&self) -> Option<bool>;
}

/// Document-level presentation state the resolved mode is applied to.
pub trait ThemeSurface {
    fn apply(&self, mode: ThemeMode);
}

/// Resolves, applies and persists the theme through its three collaborators.
#[derive(Debug, Clone, Default)]
pub struct ThemePreference<S, C, P> {
    store: S,
    ambient: C,
    surface: P,
}

impl<S, C, P> ThemePreference<S, C, P>
where
    S: PreferenceStore,
    C: ColorSchemeSource,
    P: ThemeSurface,
{
    pub fn new(store: S, ambient: C, surface: P) -> Self {
        Self {
            store,
            ambient,
            surface,
        }
    }

    /// The persisted preference, if one is stored and recognised.
    pub fn stored(&self) -> Option<ThemeMode> {
        match self.store.load(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => match raw.parse() {
                Ok(mode) => Some(mode),
                Err(e) => {
                    log::warn!("ignoring stored theme preference: {e}");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                log::warn!("theme preference unreadable, falling back to ambient: {e}");
                None
            }
        }
    }

    /// Computes the mode without applying it.
    pub fn resolve(&self) -> ThemeMode {
        self.stored()
            .or_else(|| self.ambient.prefers_dark().map(ThemeMode::from_prefers_dark))
            .unwrap_or_default()
    }

    /// Resolves the startup mode and applies it. Safe to call more than once.
    pub fn initialize(&self) -> ThemeMode {
        let mode = self.resolve();
        self.surface.apply(mode);
        log::info!("theme initialized to {mode}");
        mode
    }

    /// Flips `current`, applies the result and persists it.
    pub fn toggle(&self, current: ThemeMode) -> ThemeMode {
        let next = current.toggled();
        self.surface.apply(next);
        if let Err(e) = self.store.save(THEME_STORAGE_KEY, next.as_str()) {
            log::warn!("theme preference not persisted: {e}");
        }
        log::debug!("theme toggled {current} -> {next}");
        next
    }
}
