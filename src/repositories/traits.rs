use crate::error::StorageResult;
use crate::models::Contact;
use async_trait::async_trait;

/// Repository owning the persisted contact collection.
///
/// The collection is always read and written as a whole. Implementations
/// must keep record order and must never leave a partially written
/// collection behind.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Read every stored contact, in persisted order.
    async fn read_all(&self) -> StorageResult<Vec<Contact>>;

    /// Replace the stored collection with `contacts`.
    async fn write_all(&self, contacts: &[Contact]) -> StorageResult<()>;

    /// Human-readable location of the underlying storage.
    fn location(&self) -> String;
}
