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

//! Newsletter sign-up capture.
//!
//! The form holds the submitted fields, checks the `email` field the same
//! way a browser checks an `<input type="email">`, hands a valid address to
//! a [`SubscriptionNotifier`] and clears itself.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Name of the required form field.
pub const EMAIL_FIELD: &str = "email";

// The "valid e-mail address" production browsers use for type=email inputs.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NewsletterError {
    #[error("the email field is required")]
    MissingEmail,
    #[error("{0:?} is not a valid email address")]
    InvalidEmail(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(raw: &str) -> Result<Self, NewsletterError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(NewsletterError::MissingEmail);
        }
        if !EMAIL_RE.is_match(trimmed) {
            return Err(NewsletterError::InvalidEmail(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Receives confirmed sign-ups.
pub trait SubscriptionNotifier {
    fn notify(&self, email: &EmailAddress);
}

impl<N: SubscriptionNotifier + ?Sized> SubscriptionNotifier for std::sync::Arc<N> {
    fn notify(&self, email: &EmailAddress) {
        (**self).notify(email)
    }
}

/// Name/value pairs captured from a submitted form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields(BTreeMap<String, String>);

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewsletterForm {
    fields: FormFields,
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(fields: FormFields) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn email(&self) -> &str {
        self.fields.get(EMAIL_FIELD).unwrap_or_default()
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.fields.set(EMAIL_FIELD, value);
    }

    /// Validates the captured email, notifies once, and clears the fields.
    ///
    /// On error nothing is notified and the fields are kept.
    pub fn submit<N>(&mut self, notifier: &N) -> Result<EmailAddress, NewsletterError>
    where
        N: SubscriptionNotifier + ?Sized,
    {
        let raw = self
            .fields
            .get(EMAIL_FIELD)
            .ok_or(NewsletterError::MissingEmail)?;
        let email = EmailAddress::parse(raw)?;
        notifier.notify(&email);
        self.fields.clear();
        log::info!("newsletter subscription captured for {email}");
        Ok(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingNotifier;

    #[test]
    fn valid_submit_notifies_once_and_clears() {
        let notifier = RecordingNotifier::default();
        let mut form = NewsletterForm::new();
        form.set_email("a@b.com");

        let email = form.submit(&notifier).unwrap();

        assert_eq!(email.as_str(), "a@b.com");
        assert_eq!(notifier.received(), vec!["a@b.com".to_string()]);
        assert_eq!(form.email(), "");
        assert!(form.fields().is_empty());
    }

    #[test]
    fn invalid_submit_does_not_notify() {
        let notifier = RecordingNotifier::default();
        let mut form = NewsletterForm::new();
        form.set_email("not-an-email");

        assert_eq!(
            form.submit(&notifier),
            Err(NewsletterError::InvalidEmail("not-an-email".into()))
        );
        assert!(notifier.received().is_empty());
        assert_eq!(form.email(), "not-an-email");
    }

    #[test]
    fn missing_field_is_rejected() {
        let notifier = RecordingNotifier::default();
        let mut form = NewsletterForm::with_fields([("name", "Avery")].into_iter().collect());
        assert_eq!(form.submit(&notifier), Err(NewsletterError::MissingEmail));

        form.set_email("   ");
        assert_eq!(form.submit(&notifier), Err(NewsletterError::MissingEmail));
        assert!(notifier.received().is_empty());
    }

    #[test]
    fn second_submit_after_success_needs_new_input() {
        let notifier = RecordingNotifier::default();
        let mut form = NewsletterForm::new();
        form.set_email("you@company.com");
        form.submit(&notifier).unwrap();
        assert_eq!(form.submit(&notifier), Err(NewsletterError::MissingEmail));
        assert_eq!(notifier.received().len(), 1);
    }

    #[test]
    fn email_parsing_matches_browser_rules() {
        for ok in [
            "a@b",
            "a@b.com",
            " padded@example.org ",
            "first.last+tag@sub.example.co",
            "o'brien@example.ie",
        ] {
            assert!(EmailAddress::parse(ok).is_ok(), "{ok} should be accepted");
        }
        for bad in [
            "not-an-email",
            "@b.com",
            "a@",
            "a@@b.com",
            "a b@c.com",
            "a@-b.com",
            "a@b..com",
        ] {
            assert!(EmailAddress::parse(bad).is_err(), "{bad} should be rejected");
        }
    }
}
