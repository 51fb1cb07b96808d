//! Contact service layer.
//!
//! The four contact book operations: list, get by id, add, and remove. Each one
//! reads the whole collection from the repository, transforms it in memory,
//! and writes the whole collection back when it changed.

use crate::domain::{validate_contact, ContactId, IdGenerator, RandomIdGenerator};
use crate::error::{ContactBookError, ContactBookResult};
use crate::models::{Contact, ContactDraft};
use crate::repositories::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Contact service trait for business operations.
///
/// Callers pass ids in their string form. Stored ids are compared against
/// that string exactly, with no trimming or case folding.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Return every contact in persisted order.
    async fn list_contacts(&self) -> ContactBookResult<Vec<Contact>>;

    /// Return the first contact with the given id, or `None` if there is none.
    async fn get_contact_by_id(&self, id: &str) -> ContactBookResult<Option<Contact>>;

    /// Validate and append a new contact, returning it with its new id.
    async fn add_contact(&self, draft: ContactDraft) -> ContactBookResult<Contact>;

    /// Remove the contact with the given id, returning the removed record.
    ///
    /// Fails with `ContactBookError::NotFound` when no contact has that id.
    async fn remove_contact(&self, id: &str) -> ContactBookResult<Contact>;
}

/// Default implementation of ContactService.
///
/// Read-modify-write sequences are serialized per service instance. Two
/// instances over the same file, or other processes writing it, are not
/// coordinated.
pub struct ContactServiceImpl {
    repository: Arc<dyn ContactRepository>,
    id_generator: Arc<dyn IdGenerator>,
    write_lock: Mutex<()>,
}

impl ContactServiceImpl {
    /// Create a new contact service using random ids.
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self::with_id_generator(repository, Arc::new(RandomIdGenerator))
    }

    /// Create a new contact service with a custom id source.
    pub fn with_id_generator(
        repository: Arc<dyn ContactRepository>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            repository,
            id_generator,
            write_lock: Mutex::new(()),
        }
    }

    /// Generate an id not already used by `contacts`.
    fn fresh_id(&self, contacts: &[Contact]) -> ContactId {
        loop {
            let id = self.id_generator.generate();
            if contacts.iter().all(|contact| contact.id != id.as_str()) {
                return id;
            }
            debug!(id = %id, "generated id already in use, retrying");
        }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn list_contacts(&self) -> ContactBookResult<Vec<Contact>> {
        Ok(self.repository.read_all().await?)
    }

    async fn get_contact_by_id(&self, id: &str) -> ContactBookResult<Option<Contact>> {
        let contacts = self.list_contacts().await?;
        let found = contacts.into_iter().find(|contact| contact.id == id);
        if found.is_none() {
            warn!(id, "contact not found");
        }
        Ok(found)
    }

    async fn add_contact(&self, draft: ContactDraft) -> ContactBookResult<Contact> {
        let fields = validate_contact(&draft).map_err(|err| {
            warn!(error = %err, "rejected contact");
            ContactBookError::from(err)
        })?;

        let _guard = self.write_lock.lock().await;
        let mut contacts = self.list_contacts().await?;
        let contact = Contact::from_validated(self.fresh_id(&contacts), fields);
        contacts.push(contact.clone());
        self.repository.write_all(&contacts).await?;

        info!(id = %contact.id, name = %contact.name, "contact added");
        Ok(contact)
    }

    async fn remove_contact(&self, id: &str) -> ContactBookResult<Contact> {
        let _guard = self.write_lock.lock().await;
        let removed = self
            .get_contact_by_id(id)
            .await?
            .ok_or_else(|| ContactBookError::NotFound(id.to_string()))?;

        let mut contacts = self.list_contacts().await?;
        contacts.retain(|contact| contact.id != id);
        self.repository.write_all(&contacts).await?;

        info!(id, name = %removed.name, "contact removed");
        Ok(removed)
    }
}
