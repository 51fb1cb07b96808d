//! Contact model: the single record kept in the contact book.

use crate::domain::{ContactId, ValidatedContact};
use serde::{Deserialize, Serialize};

/// A contact as persisted in the store file.
///
/// Field values were validated when the contact was added; they are not
/// re-checked when read back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Unique identifier, assigned at creation and never changed
    pub id: String,

    /// Alphanumeric display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Phone number, free-form
    pub phone: String,
}

impl Contact {
    /// Build a contact from a freshly generated id and validated fields.
    pub fn from_validated(id: ContactId, fields: ValidatedContact) -> Self {
        Self {
            id: id.into_inner(),
            name: fields.name.into_inner(),
            email: fields.email.into_inner(),
            phone: fields.phone.into_inner(),
        }
    }
}

/// Candidate contact fields as supplied by the caller.
///
/// Every field is optional so that a missing value is reported by the
/// validator as required rather than failing earlier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ContactDraft {
    /// Create a draft with all three fields present.
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            phone: Some(phone.into()),
        }
    }
}
