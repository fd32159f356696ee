//! Phone use-case service.
//!
//! # Invariants
//! - `create` rejects a number that is already stored.
//! - `edit` pins `phone.number` to the path number before saving.
//! - `get_phones_of_person` never checks that the owner exists.

use crate::model::person::PersonId;
use crate::model::phone::Phone;
use crate::repo::phone_repo::PhoneRepository;
use crate::service::{require_absent, require_existing, Action, EntityKey, ServiceResult};
use log::{debug, warn};

/// Phone use-case facade over a repository implementation.
pub struct PhoneService<R: PhoneRepository> {
    repo: R,
}

impl<R: PhoneRepository> PhoneService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Saves `phone` unless its number is taken.
    pub fn create(&self, phone: Phone) -> ServiceResult<Phone> {
        debug!(
            "event=phone_create module=service status=start number={}",
            phone.number
        );
        let found = self.repo.find_by_id(&phone.number)?;
        require_absent(found, EntityKey::Phone(phone.number.clone()))?;
        Ok(self.repo.save(&phone)?)
    }

    /// Replaces the phone stored under `number`, keeping `number` as identity.
    pub fn edit(&self, number: &str, mut phone: Phone) -> ServiceResult<Phone> {
        debug!("event=phone_edit module=service status=start number={number}");
        self.existing(number, Action::Edit)?;
        phone.number = number.to_string();
        Ok(self.repo.save(&phone)?)
    }

    pub fn drop(&self, number: &str) -> ServiceResult<bool> {
        debug!("event=phone_drop module=service status=start number={number}");
        self.existing(number, Action::Drop)?;
        Ok(self.repo.delete(number)?)
    }

    pub fn find_all(&self) -> ServiceResult<Vec<Phone>> {
        debug!("event=phone_find_all module=service status=start");
        Ok(self.repo.find_all()?)
    }

    pub fn find_one(&self, number: &str) -> ServiceResult<Phone> {
        self.existing(number, Action::Find)
    }

    pub fn count(&self) -> ServiceResult<usize> {
        Ok(self.find_all()?.len())
    }

    /// Lists phones owned by `person_id`.
    ///
    /// An empty list is ambiguous (no phones, or no such person); it is
    /// logged and returned, never raised.
    pub fn get_phones_of_person(&self, person_id: PersonId) -> ServiceResult<Vec<Phone>> {
        let phones = self.repo.find_by_person_id(person_id)?;
        if phones.is_empty() {
            warn!(
                "event=phone_list_by_person module=service status=empty person_id={person_id}"
            );
        }
        Ok(phones)
    }

    fn existing(&self, number: &str, action: Action) -> ServiceResult<Phone> {
        let found = self.repo.find_by_id(number)?;
        require_existing(found, EntityKey::Phone(number.to_string()), action)
    }
}
