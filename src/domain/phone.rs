//! PhoneNumber value object.

use super::errors::{Field, ValidationError};
use std::fmt;

/// A phone number as entered by the user.
///
/// Only presence is enforced; the number is stored verbatim with no
/// structural checks.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("(555) 123-4567").unwrap();
/// assert_eq!(phone.as_str(), "(555) 123-4567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Empty` if the number is the empty string.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        if phone.is_empty() {
            return Err(ValidationError::Empty(Field::Phone));
        }
        Ok(Self(phone))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
