//! Study use-case service.
//!
//! # Invariants
//! - `create` rejects a `StudyKey` that is already stored.
//! - `edit` pins both embedded identities to the given key before saving.

use crate::model::study::{Study, StudyKey};
use crate::repo::study_repo::StudyRepository;
use crate::service::{require_absent, require_existing, Action, EntityKey, ServiceResult};
use log::{debug, info};

/// Study use-case facade over a repository implementation.
pub struct StudyService<R: StudyRepository> {
    repo: R,
}

impl<R: StudyRepository> StudyService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create(&self, study: Study) -> ServiceResult<Study> {
        let key = study.key();
        debug!("event=study_create module=service status=start {key}");
        let found = self.repo.find_by_id(key)?;
        require_absent(found, EntityKey::Study(key))?;
        Ok(self.repo.save(&study)?)
    }

    pub fn edit(&self, key: StudyKey, mut study: Study) -> ServiceResult<Study> {
        debug!("event=study_edit module=service status=start {key}");
        self.existing(key, Action::Edit)?;
        study.pin_key(key);
        Ok(self.repo.save(&study)?)
    }

    pub fn drop(&self, key: StudyKey) -> ServiceResult<bool> {
        debug!("event=study_drop module=service status=start {key}");
        self.existing(key, Action::Drop)?;
        Ok(self.repo.delete(key)?)
    }

    pub fn find_all(&self) -> ServiceResult<Vec<Study>> {
        info!("event=study_find_all module=service status=start");
        Ok(self.repo.find_all()?)
    }

    pub fn find_one(&self, key: StudyKey) -> ServiceResult<Study> {
        self.existing(key, Action::Find)
    }

    pub fn count(&self) -> ServiceResult<usize> {
        Ok(self.find_all()?.len())
    }

    fn existing(&self, key: StudyKey, action: Action) -> ServiceResult<Study> {
        let found = self.repo.find_by_id(key)?;
        require_existing(found, EntityKey::Study(key), action)
    }
}
