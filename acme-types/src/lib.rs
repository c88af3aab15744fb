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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Content records and UI state for the Acme landing page.
//!
//! Nothing in this crate touches the DOM. The browser bindings live in the
//! website crate and plug into the traits defined here.

pub mod content;
pub mod disclosure;
pub mod newsletter;
pub mod theme;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use content::{ContentError, SectionAnchor, SiteContent};
pub use disclosure::{AccordionGroup, Disclosure, DisclosureSet, Expanded};
pub use newsletter::{
    EmailAddress, FormFields, NewsletterError, NewsletterForm, SubscriptionNotifier,
};
pub use theme::{
    ColorSchemeSource, PreferenceStore, StorageError, ThemeMode, ThemePreference, ThemeSurface,
    THEME_STORAGE_KEY,
};
