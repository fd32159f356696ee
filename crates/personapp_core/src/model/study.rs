//! Study domain model: a person studied a profession.
//!
//! # Invariants
//! - Identity is `StudyKey`, derived from the embedded person and
//!   profession identifications.
//! - At most one study exists per key.

use crate::model::person::{Person, PersonId};
use crate::model::profession::{Profession, ProfessionId};
use crate::model::{ensure_person_id, ensure_profession_id, ModelValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Composite study identity.
///
/// Named fields keep person and profession ids from being swapped at call
/// sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StudyKey {
    pub person_id: PersonId,
    pub profession_id: ProfessionId,
}

impl StudyKey {
    pub fn new(person_id: PersonId, profession_id: ProfessionId) -> Self {
        Self {
            person_id,
            profession_id,
        }
    }
}

impl Display for StudyKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "person_id={} profession_id={}",
            self.person_id, self.profession_id
        )
    }
}

/// Academic relationship between one person and one profession.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Study {
    pub person: Person,
    pub profession: Profession,
    /// Graduation instant in Unix epoch milliseconds.
    pub graduated_at: Option<i64>,
    pub university_name: Option<String>,
}

impl Study {
    pub fn new(person: Person, profession: Profession) -> Self {
        Self {
            person,
            profession,
            graduated_at: None,
            university_name: None,
        }
    }

    /// Returns the composite identity of this study.
    pub fn key(&self) -> StudyKey {
        StudyKey::new(self.person.identification, self.profession.identification)
    }

    /// Overwrites the embedded identities with `key`.
    pub fn pin_key(&mut self, key: StudyKey) {
        self.person.identification = key.person_id;
        self.profession.identification = key.profession_id;
    }

    /// Checks both halves of the composite identity.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        ensure_person_id(self.person.identification)?;
        ensure_profession_id(self.profession.identification)
    }
}

#[cfg(test)]
mod tests {
    use super::{Study, StudyKey};
    use crate::model::person::{Gender, Person};
    use crate::model::profession::Profession;

    #[test]
    fn key_display_names_both_halves() {
        assert_eq!(
            StudyKey::new(3, 9).to_string(),
            "person_id=3 profession_id=9"
        );
    }

    #[test]
    fn pin_key_rewrites_embedded_identities() {
        let mut study = Study::new(
            Person::new(1, "Ana", "Ruiz", Gender::Female),
            Profession::new(2, "Nursing"),
        );
        study.pin_key(StudyKey::new(10, 20));
        assert_eq!(study.key(), StudyKey::new(10, 20));
        assert_eq!(study.person.first_name, "Ana");
    }
}
