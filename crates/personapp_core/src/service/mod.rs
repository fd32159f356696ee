//! Use-case services.
//!
//! # Responsibility
//! - Enforce existence invariants before delegating to repositories.
//! - Keep inbound adapters decoupled from storage details.
//!
//! # Invariants
//! - Every guarded operation is probe (`find_by_id`) then act; the two steps
//!   are separate repository calls and are not atomic.
//! - The repository is fixed at construction; services never swap it.
//! - Repository failures pass through unchanged as `ServiceError::Repo`.

pub mod person_service;
pub mod phone_service;
pub mod profession_service;
pub mod study_service;

use crate::model::person::PersonId;
use crate::model::profession::ProfessionId;
use crate::model::study::StudyKey;
use crate::repo::RepoError;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Identity of the record an operation targeted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityKey {
    Person(PersonId),
    Phone(String),
    Profession(ProfessionId),
    Study(StudyKey),
}

impl EntityKey {
    /// Lowercase entity name, used in log events.
    pub fn entity(&self) -> &'static str {
        match self {
            Self::Person(_) => "person",
            Self::Phone(_) => "phone",
            Self::Profession(_) => "profession",
            Self::Study(_) => "study",
        }
    }
}

impl Display for EntityKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Person(cc) => write!(f, "person {cc}"),
            Self::Phone(number) => write!(f, "phone {number}"),
            Self::Profession(id) => write!(f, "profession {id}"),
            Self::Study(key) => write!(f, "study ({key})"),
        }
    }
}

/// Operation that required the target record to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Edit,
    Drop,
    Find,
    GetPhones,
    GetStudies,
}

impl Action {
    fn as_str(self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Drop => "drop",
            Self::Find => "find",
            Self::GetPhones => "get phones",
            Self::GetStudies => "get studies",
        }
    }
}

/// Errors from use-case operations.
#[derive(Debug)]
pub enum ServiceError {
    /// Target record is absent.
    NotFound { key: EntityKey, action: Action },
    /// Create found a record under the same identity.
    AlreadyExists(EntityKey),
    /// Repository-level failure.
    Repo(RepoError),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists(_))
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { key, action } => {
                write!(f, "{key} does not exist; cannot {}", action.as_str())
            }
            Self::AlreadyExists(key) => write!(f, "{key} already exists; cannot create"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Turns an absent probe result into `NotFound`.
fn require_existing<T>(found: Option<T>, key: EntityKey, action: Action) -> ServiceResult<T> {
    match found {
        Some(record) => Ok(record),
        None => {
            info!(
                "event={}_{} module=service status=rejected reason=not_found key=\"{key}\"",
                key.entity(),
                action.as_str().replace(' ', "_")
            );
            Err(ServiceError::NotFound { key, action })
        }
    }
}

/// Turns a present probe result into `AlreadyExists`.
fn require_absent<T>(found: Option<T>, key: EntityKey) -> ServiceResult<()> {
    if found.is_none() {
        return Ok(());
    }
    info!(
        "event={}_create module=service status=rejected reason=already_exists key=\"{key}\"",
        key.entity()
    );
    Err(ServiceError::AlreadyExists(key))
}
