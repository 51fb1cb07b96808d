//! Contact Book - a local contact list kept in a single JSON file.
//!
//! Contacts (id, name, email, phone) can be listed, looked up by id, added,
//! and removed. Every operation reads the whole file, works in memory, and
//! writes the whole file back atomically.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects, the validator, and id generation
//! - **models**: The persisted contact record and the unvalidated draft
//! - **repositories**: Store abstraction and the JSON file implementation
//! - **services**: The list / get / add / remove operations
//! - **report**: User-facing outcome messages
//! - **config**: Configuration from environment variables
//! - **error**: Error taxonomy
//!
//! # Example
//!
//! ```no_run
//! use contact_book::{ContactDraft, ContactService, ContactServiceImpl, JsonFileContactRepository};
//! use std::sync::Arc;
//!
//! # async fn demo() -> contact_book::ContactBookResult<()> {
//! let repo = Arc::new(JsonFileContactRepository::new("contacts.json"));
//! let service = ContactServiceImpl::new(repo);
//!
//! let added = service
//!     .add_contact(ContactDraft::new("alice1", "alice@example.com", "5551234"))
//!     .await?;
//! let found = service.get_contact_by_id(&added.id).await?;
//! assert_eq!(found, Some(added));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod report;
pub mod repositories;
pub mod services;

pub use config::Config;
pub use domain::{ContactId, IdGenerator, RandomIdGenerator, ValidationError};
pub use error::{ConfigError, ContactBookError, ContactBookResult, ErrorKind, StorageError};
pub use models::{Contact, ContactDraft};
pub use report::{Report, ReportLevel};
pub use repositories::{ContactRepository, JsonFileContactRepository};
pub use services::{ContactService, ContactServiceImpl};
