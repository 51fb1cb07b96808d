//! End-to-end test utilities.
//!
//! Each test gets its own store file inside a temporary directory that is
//! removed when the [`TestStore`] is dropped.

use contact_book::{Contact, ContactServiceImpl, JsonFileContactRepository};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

pub mod fixtures;

/// A contact book service backed by a file in a scratch directory.
pub struct TestStore {
    _dir: TempDir,
    path: PathBuf,
    pub service: ContactServiceImpl,
}

#[allow(dead_code)]
impl TestStore {
    /// Create a service over a store file that does not exist yet.
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("contacts.json");
        let service = ContactServiceImpl::new(Arc::new(JsonFileContactRepository::new(&path)));
        Self {
            _dir: dir,
            path,
            service,
        }
    }

    /// Create a service over a store file seeded with `contacts`.
    pub fn seeded(contacts: &[Contact]) -> Self {
        let store = Self::empty();
        let json = serde_json::to_string(contacts).expect("serialize seed contacts");
        std::fs::write(&store.path, json).expect("write seed file");
        store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw contents of the store file.
    pub fn raw(&self) -> String {
        std::fs::read_to_string(&self.path).expect("read store file")
    }

    /// Parsed contents of the store file, bypassing the service.
    pub fn on_disk(&self) -> Vec<Contact> {
        serde_json::from_str(&self.raw()).expect("parse store file")
    }
}

/// Assert that a contact has valid required fields.
#[allow(dead_code)]
pub fn assert_contact_valid(contact: &Contact) {
    assert!(!contact.id.is_empty(), "Contact ID should not be empty");
    assert!(!contact.name.is_empty(), "Contact name should not be empty");
    assert!(!contact.email.is_empty(), "Contact email should not be empty");
    assert!(!contact.phone.is_empty(), "Contact phone should not be empty");
}
