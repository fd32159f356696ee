//! Person use-case service.
//!
//! # Invariants
//! - `create` performs no duplicate probe; saving an existing `cc` replaces
//!   the stored person.
//! - `edit` saves the payload as given; the caller keeps `cc` consistent.
//! - `get_phones`/`get_studies` read the lists materialized on the loaded
//!   person instead of issuing new queries.

use crate::model::person::{Person, PersonId};
use crate::model::phone::Phone;
use crate::model::study::Study;
use crate::repo::person_repo::PersonRepository;
use crate::service::{require_existing, Action, EntityKey, ServiceResult};
use log::debug;

/// Person use-case facade over a repository implementation.
pub struct PersonService<R: PersonRepository> {
    repo: R,
}

impl<R: PersonRepository> PersonService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Saves `person` unconditionally.
    pub fn create(&self, person: Person) -> ServiceResult<Person> {
        debug!(
            "event=person_create module=service status=start cc={}",
            person.identification
        );
        Ok(self.repo.save(&person)?)
    }

    /// Replaces the person stored under `cc`.
    pub fn edit(&self, cc: PersonId, person: Person) -> ServiceResult<Person> {
        debug!("event=person_edit module=service status=start cc={cc}");
        self.existing(cc, Action::Edit)?;
        Ok(self.repo.save(&person)?)
    }

    /// Deletes the person stored under `cc`.
    pub fn drop(&self, cc: PersonId) -> ServiceResult<bool> {
        debug!("event=person_drop module=service status=start cc={cc}");
        self.existing(cc, Action::Drop)?;
        Ok(self.repo.delete(cc)?)
    }

    pub fn find_all(&self) -> ServiceResult<Vec<Person>> {
        debug!("event=person_find_all module=service status=start");
        Ok(self.repo.find_all()?)
    }

    pub fn find_one(&self, cc: PersonId) -> ServiceResult<Person> {
        debug!("event=person_find_one module=service status=start cc={cc}");
        self.existing(cc, Action::Find)
    }

    /// Number of persons, as `find_all().len()`.
    pub fn count(&self) -> ServiceResult<usize> {
        Ok(self.find_all()?.len())
    }

    pub fn get_phones(&self, cc: PersonId) -> ServiceResult<Vec<Phone>> {
        Ok(self.existing(cc, Action::GetPhones)?.phones)
    }

    pub fn get_studies(&self, cc: PersonId) -> ServiceResult<Vec<Study>> {
        Ok(self.existing(cc, Action::GetStudies)?.studies)
    }

    fn existing(&self, cc: PersonId, action: Action) -> ServiceResult<Person> {
        let found = self.repo.find_by_id(cc)?;
        require_existing(found, EntityKey::Person(cc), action)
    }
}
