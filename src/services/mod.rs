//! Application service layer.
//!
//! Services contain the contact book operations and orchestrate the
//! validator, the id generator, and the repository. They form the boundary
//! between the command-line front end and the data access layer.

mod contact_service;

pub use contact_service::{ContactService, ContactServiceImpl};

// Re-export common types used by services
pub use crate::models::{Contact, ContactDraft};
