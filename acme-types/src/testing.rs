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

//! In-memory doubles for the collaborator traits.
//!
//! Only available with the `testing` feature enabled.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::newsletter::{EmailAddress, SubscriptionNotifier};
use crate::theme::{ColorSchemeSource, PreferenceStore, StorageError, ThemeMode, ThemeSurface};

/// A key-value store backed by a shared map. Clones see the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
    failing: bool,
}

impl MemoryStore {
    /// A store whose every read and write fails.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.failing {
            return Err(StorageError::Read {
                key: key.to_string(),
                reason: "store disabled".to_string(),
            });
        }
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.failing {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "store disabled".to_string(),
            });
        }
        let mut values = self
            .values
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reports a fixed ambient preference.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedColorScheme(pub Option<bool>);

impl ColorSchemeSource for FixedColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

/// Remembers every mode applied to it.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    applied: Arc<Mutex<Vec<ThemeMode>>>,
}

impl RecordingSurface {
    pub fn applied(&self) -> Vec<ThemeMode> {
        self.applied.lock().map(|v| v.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<ThemeMode> {
        self.applied().last().copied()
    }
}

impl ThemeSurface for RecordingSurface {
    fn apply(&self, mode: ThemeMode) {
        if let Ok(mut applied) = self.applied.lock() {
            applied.push(mode);
        }
    }
}

/// Collects every address it is notified about.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    received: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn received(&self) -> Vec<String> {
        self.received.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl SubscriptionNotifier for RecordingNotifier {
    fn notify(&self, email: &EmailAddress) {
        if let Ok(mut received) = self.received.lock() {
            received.push(email.to_string());
        }
    }
}
