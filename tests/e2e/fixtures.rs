//! Test fixtures and sample data for E2E tests.

use contact_book::{Contact, ContactDraft};

/// A stored contact with the given id and name and derived email/phone.
#[allow(dead_code)]
pub fn stored_contact(id: &str, name: &str) -> Contact {
    Contact {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: format!("555{:04}", name.len()),
    }
}

/// The three-contact book most tests start from.
#[allow(dead_code)]
pub fn sample_book() -> Vec<Contact> {
    vec![
        stored_contact("AeCDe5Xs1", "Allen"),
        stored_contact("qdggE76Jtb", "Chaim"),
        stored_contact("rsKkOQUi80", "Kennedy"),
    ]
}

/// A draft that passes validation.
#[allow(dead_code)]
pub fn valid_draft() -> ContactDraft {
    ContactDraft::new("alice1", "alice@sub.example.com", "5551234")
}
