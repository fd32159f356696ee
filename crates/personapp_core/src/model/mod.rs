//! Personal-records domain model.
//!
//! # Responsibility
//! - Define the four record shapes handled by core: person, phone,
//!   profession and study.
//! - Own identity-field validation shared by every persistence adapter.
//!
//! # Invariants
//! - Person and profession identities are strictly positive integers.
//! - Phone identity is a non-blank number string.
//! - Study identity is the `(person_id, profession_id)` pair, never a
//!   surrogate key.

pub mod person;
pub mod phone;
pub mod profession;
pub mod study;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Identity-field violations detected before persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelValidationError {
    /// Person `cc` must be > 0.
    NonPositivePersonId(i64),
    /// Profession identification must be > 0.
    NonPositiveProfessionId(i64),
    /// Phone number is empty after trim.
    BlankPhoneNumber,
}

impl Display for ModelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositivePersonId(value) => {
                write!(f, "person identification must be positive, got {value}")
            }
            Self::NonPositiveProfessionId(value) => {
                write!(f, "profession identification must be positive, got {value}")
            }
            Self::BlankPhoneNumber => write!(f, "phone number must not be blank"),
        }
    }
}

impl Error for ModelValidationError {}

pub(crate) fn ensure_person_id(value: i64) -> Result<(), ModelValidationError> {
    if value <= 0 {
        return Err(ModelValidationError::NonPositivePersonId(value));
    }
    Ok(())
}

pub(crate) fn ensure_profession_id(value: i64) -> Result<(), ModelValidationError> {
    if value <= 0 {
        return Err(ModelValidationError::NonPositiveProfessionId(value));
    }
    Ok(())
}
