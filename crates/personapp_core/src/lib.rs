//! Core application layer for PersonApp.
//! This crate is the single source of truth for record existence rules.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::person::{Gender, Person, PersonId};
pub use model::phone::Phone;
pub use model::profession::{Profession, ProfessionId};
pub use model::study::{Study, StudyKey};
pub use model::ModelValidationError;
pub use repo::person_repo::{PersonRepository, SqlitePersonRepository};
pub use repo::phone_repo::{PhoneRepository, SqlitePhoneRepository};
pub use repo::profession_repo::{ProfessionRepository, SqliteProfessionRepository};
pub use repo::study_repo::{SqliteStudyRepository, StudyRepository};
pub use repo::{RepoError, RepoResult};
pub use service::person_service::PersonService;
pub use service::phone_service::PhoneService;
pub use service::profession_service::ProfessionService;
pub use service::study_service::StudyService;
pub use service::{Action, EntityKey, ServiceError, ServiceResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
