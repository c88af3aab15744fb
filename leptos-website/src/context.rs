// SPDX-License-Identifier: MIT OR Apache-2.0

//! Root-level shared state: the theme and the sign-up notifier.

use std::sync::Arc;

use acme_types::{EmailAddress, SubscriptionNotifier, ThemeMode};
use leptos::prelude::*;

use crate::platform::{browser_theme, AlertNotifier};

/// The resolved theme. Provided once by [`provide_theme_context`].
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    pub fn is_dark(&self) -> bool {
        self.mode().is_dark()
    }

    pub fn toggle(&self) {
        let next = browser_theme().toggle(self.mode.get_untracked());
        self.mode.set(next);
    }
}

/// Resolves the startup theme once and applies it. Afterwards the mode only
/// changes through [`ThemeContext::toggle`].
pub fn provide_theme_context() -> ThemeContext {
    let ctx = ThemeContext {
        mode: RwSignal::new(browser_theme().initialize()),
    };
    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("Theme context missing")
}

/// Where newsletter sign-ups are sent.
#[derive(Clone)]
pub struct Notifier(Arc<dyn SubscriptionNotifier + Send + Sync>);

impl Notifier {
    pub fn new(notifier: impl SubscriptionNotifier + Send + Sync + 'static) -> Self {
        Self(Arc::new(notifier))
    }

    pub fn alert() -> Self {
        Self::new(AlertNotifier)
    }
}

impl SubscriptionNotifier for Notifier {
    fn notify(&self, email: &EmailAddress) {
        self.0.notify(email);
    }
}

/// Keeps a notifier provided further up (tests do this), else provides the alert one.
pub fn provide_notifier_context() -> Notifier {
    if let Some(existing) = use_context::<Notifier>() {
        return existing;
    }
    let notifier = Notifier::alert();
    provide_context(notifier.clone());
    notifier
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_else(Notifier::alert)
}
