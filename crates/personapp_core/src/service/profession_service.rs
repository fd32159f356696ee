//! Profession use-case service.
//!
//! # Invariants
//! - `create` performs no duplicate probe (last write wins).
//! - `edit` pins `profession.identification` before saving.

use crate::model::profession::{Profession, ProfessionId};
use crate::repo::profession_repo::ProfessionRepository;
use crate::service::{require_existing, Action, EntityKey, ServiceResult};
use log::debug;

/// Profession use-case facade over a repository implementation.
pub struct ProfessionService<R: ProfessionRepository> {
    repo: R,
}

impl<R: ProfessionRepository> ProfessionService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create(&self, profession: Profession) -> ServiceResult<Profession> {
        debug!(
            "event=profession_create module=service status=start id={}",
            profession.identification
        );
        Ok(self.repo.save(&profession)?)
    }

    pub fn edit(
        &self,
        identification: ProfessionId,
        mut profession: Profession,
    ) -> ServiceResult<Profession> {
        debug!("event=profession_edit module=service status=start id={identification}");
        self.existing(identification, Action::Edit)?;
        profession.identification = identification;
        Ok(self.repo.save(&profession)?)
    }

    pub fn drop(&self, identification: ProfessionId) -> ServiceResult<bool> {
        debug!("event=profession_drop module=service status=start id={identification}");
        self.existing(identification, Action::Drop)?;
        Ok(self.repo.delete(identification)?)
    }

    pub fn find_all(&self) -> ServiceResult<Vec<Profession>> {
        debug!("event=profession_find_all module=service status=start");
        Ok(self.repo.find_all()?)
    }

    pub fn find_one(&self, identification: ProfessionId) -> ServiceResult<Profession> {
        debug!("event=profession_find_one module=service status=start id={identification}");
        self.existing(identification, Action::Find)
    }

    pub fn count(&self) -> ServiceResult<usize> {
        debug!("event=profession_count module=service status=start");
        Ok(self.find_all()?.len())
    }

    fn existing(&self, identification: ProfessionId, action: Action) -> ServiceResult<Profession> {
        let found = self.repo.find_by_id(identification)?;
        require_existing(found, EntityKey::Profession(identification), action)
    }
}
