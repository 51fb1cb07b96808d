use async_trait::async_trait;
use contact_book::error::{StorageError, StorageResult};
use contact_book::models::Contact;
use contact_book::repositories::ContactRepository;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Which repository call should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Read,
    Write,
}

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// seeded with test data, tracks method calls for verification, and can be
/// told to fail reads or writes.
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<Vec<Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_on: Arc<Mutex<Option<FailOn>>>,
}

impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            fail_on: Arc::new(Mutex::new(None)),
        }
    }

    /// Snapshot of the stored collection.
    pub fn contacts(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().clone()
    }

    /// Make subsequent calls of the given kind fail (or clear with `None`).
    pub fn fail_on(&self, fail_on: Option<FailOn>) {
        *self.fail_on.lock().unwrap() = fail_on;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn should_fail(&self, kind: FailOn) -> bool {
        *self.fail_on.lock().unwrap() == Some(kind)
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn read_all(&self) -> StorageResult<Vec<Contact>> {
        self.track_call("read_all");

        if self.should_fail(FailOn::Read) {
            return Err(StorageError::Read {
                path: self.location(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "mock read failure"),
            });
        }
        Ok(self.contacts())
    }

    async fn write_all(&self, contacts: &[Contact]) -> StorageResult<()> {
        self.track_call("write_all");

        if self.should_fail(FailOn::Write) {
            return Err(StorageError::Write {
                path: self.location(),
                source: io::Error::new(io::ErrorKind::Other, "mock write failure"),
            });
        }
        *self.contacts.lock().unwrap() = contacts.to_vec();
        Ok(())
    }

    fn location(&self) -> String {
        "mock://contacts".to_string()
    }
}
