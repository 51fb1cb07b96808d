//! ContactName value object.

use super::errors::{Field, ValidationError};
use std::fmt;

/// A validated contact name.
///
/// Names consist of ASCII letters and digits only and are between
/// [`ContactName::MIN_LEN`] and [`ContactName::MAX_LEN`] characters long.
///
/// # Example
///
/// ```
/// use contact_book::domain::ContactName;
///
/// let name = ContactName::new("alice1").unwrap();
/// assert_eq!(name.as_str(), "alice1");
/// assert!(ContactName::new("al").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactName(String);

impl ContactName {
    pub const MIN_LEN: usize = 3;
    pub const MAX_LEN: usize = 30;

    /// Create a new ContactName, validating the format.
    ///
    /// Rules are checked in order: non-empty, alphanumeric, minimum length,
    /// maximum length. The first failing rule is returned.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if name.is_empty() {
            return Err(ValidationError::Empty(Field::Name));
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::NotAlphanumeric);
        }

        let len = name.chars().count();
        if len < Self::MIN_LEN {
            return Err(ValidationError::TooShort { min: Self::MIN_LEN });
        }
        if len > Self::MAX_LEN {
            return Err(ValidationError::TooLong { max: Self::MAX_LEN });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
