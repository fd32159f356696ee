//! Study repository contract and SQLite implementation.
//!
//! # Invariants
//! - Rows are keyed by `(person_id, profession_id)`; there is no surrogate id.
//! - `save` writes the study row only; the embedded person and profession
//!   must already exist (enforced by foreign keys).
//! - Loaded studies embed shallow person/profession records (no phones or
//!   nested studies).

use crate::model::person::{Person, PersonId};
use crate::model::profession::Profession;
use crate::model::study::{Study, StudyKey};
use crate::repo::person_repo::parse_gender;
use crate::repo::{ensure_connection_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, Row, ToSql};

const STUDY_SELECT_SQL: &str = "SELECT
    s.person_id AS person_id,
    s.profession_id AS profession_id,
    s.graduated_at AS graduated_at,
    s.university_name AS university_name,
    p.first_name AS first_name,
    p.last_name AS last_name,
    p.gender AS gender,
    p.age AS age,
    f.name AS profession_name,
    f.description AS profession_description
FROM studies s
JOIN persons p ON p.identification = s.person_id
JOIN professions f ON f.identification = s.profession_id";

/// Persistence port for studies.
pub trait StudyRepository {
    /// Upserts by `study.key()` and returns the stored study.
    fn save(&self, study: &Study) -> RepoResult<Study>;
    fn delete(&self, key: StudyKey) -> RepoResult<bool>;
    fn find_by_id(&self, key: StudyKey) -> RepoResult<Option<Study>>;
    fn find_all(&self) -> RepoResult<Vec<Study>>;
}

/// SQLite-backed study repository.
pub struct SqliteStudyRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStudyRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(
            conn,
            "studies",
            &["person_id", "profession_id", "graduated_at", "university_name"],
        )?;
        Ok(Self { conn })
    }
}

impl StudyRepository for SqliteStudyRepository<'_> {
    fn save(&self, study: &Study) -> RepoResult<Study> {
        study.validate()?;
        let key = study.key();

        self.conn.execute(
            "INSERT INTO studies (person_id, profession_id, graduated_at, university_name)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT (person_id, profession_id) DO UPDATE SET
                graduated_at = excluded.graduated_at,
                university_name = excluded.university_name;",
            params![
                key.person_id,
                key.profession_id,
                study.graduated_at,
                study.university_name.as_deref(),
            ],
        )?;

        self.find_by_id(key)?
            .ok_or_else(|| RepoError::InvalidData(format!("study ({key}) missing after save")))
    }

    fn delete(&self, key: StudyKey) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "DELETE FROM studies WHERE person_id = ?1 AND profession_id = ?2;",
            params![key.person_id, key.profession_id],
        )?;
        Ok(changed > 0)
    }

    fn find_by_id(&self, key: StudyKey) -> RepoResult<Option<Study>> {
        let studies = query_studies(
            self.conn,
            "WHERE s.person_id = ?1 AND s.profession_id = ?2",
            &[&key.person_id, &key.profession_id],
        )?;
        Ok(studies.into_iter().next())
    }

    fn find_all(&self) -> RepoResult<Vec<Study>> {
        query_studies(self.conn, "", &[])
    }
}

pub(crate) fn load_studies_of_person(
    conn: &Connection,
    person_id: PersonId,
) -> RepoResult<Vec<Study>> {
    query_studies(conn, "WHERE s.person_id = ?1", &[&person_id])
}

fn query_studies(conn: &Connection, filter: &str, args: &[&dyn ToSql]) -> RepoResult<Vec<Study>> {
    let mut stmt = conn.prepare(&format!(
        "{STUDY_SELECT_SQL} {filter} ORDER BY s.person_id ASC, s.profession_id ASC;"
    ))?;
    let mut rows = stmt.query(args)?;
    let mut studies = Vec::new();
    while let Some(row) = rows.next()? {
        studies.push(parse_study_row(row)?);
    }
    Ok(studies)
}

fn parse_study_row(row: &Row<'_>) -> RepoResult<Study> {
    let gender_text: String = row.get("gender")?;
    let person = Person {
        identification: row.get("person_id")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        gender: parse_gender(&gender_text)?,
        age: row.get("age")?,
        phones: Vec::new(),
        studies: Vec::new(),
    };
    let profession = Profession {
        identification: row.get("profession_id")?,
        name: row.get("profession_name")?,
        description: row.get("profession_description")?,
    };

    Ok(Study {
        person,
        profession,
        graduated_at: row.get("graduated_at")?,
        university_name: row.get("university_name")?,
    })
}
