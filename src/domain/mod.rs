//! Domain value objects and validation.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! its id, name, email address, and phone number. Each value object validates
//! at construction time, and [`validate_contact`] combines them into the single
//! gate a candidate contact must pass before it can be stored.

pub mod contact_id;
pub mod email;
pub mod errors;
pub mod name;
pub mod phone;
pub mod validator;

pub use contact_id::{ContactId, IdGenerator, RandomIdGenerator};
pub use email::EmailAddress;
pub use errors::{Field, ValidationError};
pub use name::ContactName;
pub use phone::PhoneNumber;
pub use validator::{validate_contact, ValidatedContact};
