//! Domain validation errors.

use std::fmt;

/// The contact field a validation rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_str())
    }
}

/// Errors that can occur during domain value object validation.
///
/// Each variant identifies one failed rule; the validator stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The field was not supplied at all.
    Required(Field),

    /// The field was supplied as an empty string.
    Empty(Field),

    /// The name contains characters other than ASCII letters and digits.
    NotAlphanumeric,

    /// The name is shorter than the minimum length.
    TooShort { min: usize },

    /// The name is longer than the maximum length.
    TooLong { max: usize },

    /// The email address is not syntactically valid.
    InvalidEmail(String),

    /// The email domain has fewer segments than required.
    TooFewDomainSegments { min: usize },

    /// The email top-level domain is not in the allowed set.
    DisallowedTld(String),

    /// The provided ID is empty.
    EmptyId,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required(field) => write!(f, "{} is required", field),
            Self::Empty(field) => write!(f, "{} is not allowed to be empty", field),
            Self::NotAlphanumeric => write!(
                f,
                "{} must only contain alpha-numeric characters",
                Field::Name
            ),
            Self::TooShort { min } => write!(
                f,
                "{} length must be at least {} characters long",
                Field::Name,
                min
            ),
            Self::TooLong { max } => write!(
                f,
                "{} length must be less than or equal to {} characters long",
                Field::Name,
                max
            ),
            Self::InvalidEmail(_) => write!(f, "{} must be a valid email", Field::Email),
            Self::TooFewDomainSegments { min } => write!(
                f,
                "{} domain must have at least {} segments",
                Field::Email,
                min
            ),
            Self::DisallowedTld(tld) => write!(
                f,
                "{} top-level domain \"{}\" is not allowed (expected com or net)",
                Field::Email,
                tld
            ),
            Self::EmptyId => write!(f, "ID cannot be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}
