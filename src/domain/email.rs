//! EmailAddress value object.

use super::errors::{Field, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Dot-separated atoms of RFC 5322 `atext` characters.
static LOCAL_PART: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*$")
        .expect("local part pattern is valid")
});

/// A single DNS label: letters, digits and inner hyphens, 1 to 63 characters.
static DOMAIN_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$")
        .expect("domain label pattern is valid")
});

/// A type-safe wrapper for email addresses.
///
/// Addresses are validated at construction time: the syntax must be valid,
/// the domain must have at least [`EmailAddress::MIN_DOMAIN_SEGMENTS`] labels,
/// and the top-level domain must be one of [`EmailAddress::ALLOWED_TLDS`].
/// The TLD comparison ignores ASCII case; the address itself is kept as entered.
///
/// # Example
///
/// ```
/// use contact_book::domain::EmailAddress;
///
/// let email = EmailAddress::new("user@sub.example.com").unwrap();
/// assert_eq!(email.as_str(), "user@sub.example.com");
/// assert!(EmailAddress::new("user@example.org").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub const MIN_DOMAIN_SEGMENTS: usize = 2;
    pub const ALLOWED_TLDS: [&'static str; 2] = ["com", "net"];

    const MAX_LOCAL_LEN: usize = 64;
    const MAX_LEN: usize = 254;

    /// Create a new EmailAddress, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must not be empty
    /// - Must contain exactly one '@' with a valid local part before it
    /// - Domain labels must be valid DNS labels, at least two of them
    /// - The last label must be an allowed TLD (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns the first failing rule as a `ValidationError`.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if email.is_empty() {
            return Err(ValidationError::Empty(Field::Email));
        }

        let (local, domain) = match email.split_once('@') {
            Some((local, domain)) if !domain.contains('@') => (local, domain),
            _ => return Err(ValidationError::InvalidEmail(email)),
        };

        if email.len() > Self::MAX_LEN
            || local.len() > Self::MAX_LOCAL_LEN
            || !LOCAL_PART.is_match(local)
        {
            return Err(ValidationError::InvalidEmail(email));
        }

        let labels: Vec<&str> = domain.split('.').collect();
        if !labels.iter().all(|label| DOMAIN_LABEL.is_match(label)) {
            return Err(ValidationError::InvalidEmail(email));
        }
        if labels.len() < Self::MIN_DOMAIN_SEGMENTS {
            return Err(ValidationError::TooFewDomainSegments {
                min: Self::MIN_DOMAIN_SEGMENTS,
            });
        }

        let tld = labels[labels.len() - 1];
        if !Self::ALLOWED_TLDS
            .iter()
            .any(|allowed| tld.eq_ignore_ascii_case(allowed))
        {
            return Err(ValidationError::DisallowedTld(tld.to_string()));
        }

        Ok(Self(email))
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
