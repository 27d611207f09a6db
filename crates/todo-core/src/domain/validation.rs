//! Form Validation
//!
//! Per-field error collection shared by every form in the app.

use std::collections::BTreeMap;

use thiserror::Error;

/// Minimum password length accepted by every form
pub(crate) const MIN_PASSWORD_LEN: usize = 6;

/// Validation failures keyed by field name, one message per field
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error; the first message for a field wins.
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// `Ok(value)` when nothing was recorded
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    /// Require a non-blank value; returns the trimmed value when present.
    pub(crate) fn require<'a>(
        &mut self,
        field: &'static str,
        value: &'a str,
        message: &str,
    ) -> Option<&'a str> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.insert(field, message);
            None
        } else {
            Some(trimmed)
        }
    }

    /// Require at least `min` characters; skipped when the field is already in error.
    pub(crate) fn min_chars(&mut self, field: &'static str, value: &str, min: usize, message: &str) {
        if value.chars().count() < min {
            self.insert(field, message);
        }
    }

    /// Require a well-formed email address
    pub(crate) fn email(&mut self, field: &'static str, value: &str, message: &str) {
        if !is_valid_email(value) {
            self.insert(field, message);
        }
    }
}

/// `local@domain.tld` with no whitespace, a single `@` and a TLD of at least two characters
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty()
        && !host.starts_with('.')
        && !host.ends_with('.')
        && !host.contains("..")
        && tld.chars().count() >= 2
        && tld.chars().all(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_syntax() {
        for ok in ["a@b.com", "first.last@mail.example.org", "x+tag@host.io"] {
            assert!(is_valid_email(ok), "{ok} should be valid");
        }
        for bad in ["", "plain", "@b.com", "a@", "a@b", "a@b.c", "a b@c.com", "a@@b.com", "a@.com", "a@b..com"] {
            assert!(!is_valid_email(bad), "{bad} should be invalid");
        }
    }

    #[test]
    fn test_first_message_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.insert("email", "Email is required");
        errors.insert("email", "Invalid email format");
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_require_treats_blank_as_missing() {
        let mut errors = FieldErrors::new();
        assert_eq!(errors.require("title", "   ", "Title is required"), None);
        assert_eq!(errors.require("status", " active ", "Status is required"), Some("active"));
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert!(errors.get("status").is_none());
    }

    #[test]
    fn test_into_result() {
        assert_eq!(FieldErrors::new().into_result(7), Ok(7));
        let mut errors = FieldErrors::new();
        errors.insert("name", "Name is required");
        assert!(errors.into_result(()).is_err());
    }
}
