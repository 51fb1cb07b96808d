//! Data models for the contact book.
//!
//! [`Contact`] is the persisted record; [`ContactDraft`] is the unvalidated
//! candidate handed to the add operation.

pub mod contact;

pub use contact::{Contact, ContactDraft};
