//! ContactId value object and id generation.

use super::errors::ValidationError;
use std::fmt;
use uuid::Uuid;

/// A type-safe wrapper for contact IDs.
///
/// This ensures that contact IDs are validated at construction time
/// and cannot be empty. Ids are opaque: callers compare them as strings
/// and never interpret their contents.
///
/// # Example
///
/// ```
/// use contact_book::domain::ContactId;
///
/// let id = ContactId::new("qZ3x_9aKp0").unwrap();
/// assert_eq!(id.as_str(), "qZ3x_9aKp0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactId(String);

impl ContactId {
    /// Create a new ContactId, validating that it's not empty.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyId` if the provided ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Ok(Self(id))
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of fresh contact ids.
///
/// Implementations must return non-empty ids that are unique with overwhelming
/// probability across a single contact book.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> ContactId;
}

/// Generates short URL-safe ids from random UUIDv4 bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl RandomIdGenerator {
    pub const ID_LEN: usize = 10;

    const ALPHABET: &'static [u8; 64] =
        b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz_-";
}

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> ContactId {
        let uuid = Uuid::new_v4();
        let id: String = uuid
            .as_bytes()
            .iter()
            .take(Self::ID_LEN)
            .map(|byte| Self::ALPHABET[usize::from(byte & 0x3f)] as char)
            .collect();
        ContactId(id)
    }
}
