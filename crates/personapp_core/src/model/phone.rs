//! Phone domain model.

use crate::model::person::PersonId;
use crate::model::{ensure_person_id, ModelValidationError};
use serde::{Deserialize, Serialize};

/// A phone line owned by one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    /// Dialable number; unique identity.
    pub number: String,
    /// Carrier name.
    pub company: String,
    /// Owning person `cc`.
    pub person_id: PersonId,
}

impl Phone {
    pub fn new(number: impl Into<String>, company: impl Into<String>, person_id: PersonId) -> Self {
        Self {
            number: number.into(),
            company: company.into(),
            person_id,
        }
    }

    /// Checks identity and owner reference fields.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        if self.number.trim().is_empty() {
            return Err(ModelValidationError::BlankPhoneNumber);
        }
        ensure_person_id(self.person_id)
    }
}
