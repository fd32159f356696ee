//! Person domain model.
//!
//! # Invariants
//! - `identification` (the person's `cc`) is immutable once persisted.
//! - `phones` and `studies` are aggregated, not owned: they are filled by
//!   the repository on load and ignored on save.

use crate::model::phone::Phone;
use crate::model::study::Study;
use crate::model::{ensure_person_id, ModelValidationError};
use serde::{Deserialize, Serialize};

/// Person identity (`cc`).
pub type PersonId = i64;

/// Declared gender of a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Stable lowercase label used for storage and display.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    /// Parses a stored label; returns `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// A tracked person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Citizen card number; unique identity.
    pub identification: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub age: Option<u32>,
    /// Phones owned by this person, as materialized on load.
    #[serde(default)]
    pub phones: Vec<Phone>,
    /// Studies of this person, as materialized on load.
    #[serde(default)]
    pub studies: Vec<Study>,
}

impl Person {
    /// Creates a person with no age and no related records.
    pub fn new(
        identification: PersonId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        gender: Gender,
    ) -> Self {
        Self {
            identification,
            first_name: first_name.into(),
            last_name: last_name.into(),
            gender,
            age: None,
            phones: Vec::new(),
            studies: Vec::new(),
        }
    }

    /// Sets age, builder style.
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Checks identity fields.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        ensure_person_id(self.identification)
    }

    /// Returns `first_name last_name`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
