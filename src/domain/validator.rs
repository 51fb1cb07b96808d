//! Validation gate for new contacts.

use super::errors::{Field, ValidationError};
use super::{ContactName, EmailAddress, PhoneNumber};
use crate::models::ContactDraft;

/// A contact whose fields have all passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedContact {
    pub name: ContactName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
}

/// Validate a candidate contact.
///
/// Name rules are checked first, then email, then phone. Only the first
/// failing rule is reported. The draft is not modified.
pub fn validate_contact(draft: &ContactDraft) -> Result<ValidatedContact, ValidationError> {
    let name = required(Field::Name, draft.name.as_deref()).and_then(ContactName::new)?;
    let email = required(Field::Email, draft.email.as_deref()).and_then(EmailAddress::new)?;
    let phone = required(Field::Phone, draft.phone.as_deref()).and_then(PhoneNumber::new)?;

    Ok(ValidatedContact { name, email, phone })
}

fn required(field: Field, value: Option<&str>) -> Result<&str, ValidationError> {
    value.ok_or(ValidationError::Required(field))
}
