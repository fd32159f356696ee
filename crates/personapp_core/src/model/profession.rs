//! Profession domain model.

use crate::model::{ensure_profession_id, ModelValidationError};
use serde::{Deserialize, Serialize};

/// Profession identity.
pub type ProfessionId = i64;

/// A profession a person can study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profession {
    pub identification: ProfessionId,
    pub name: String,
    pub description: Option<String>,
}

impl Profession {
    pub fn new(identification: ProfessionId, name: impl Into<String>) -> Self {
        Self {
            identification,
            name: name.into(),
            description: None,
        }
    }

    /// Sets description, builder style.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn validate(&self) -> Result<(), ModelValidationError> {
        ensure_profession_id(self.identification)
    }
}
