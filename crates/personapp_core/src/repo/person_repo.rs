//! Person repository contract and SQLite implementation.
//!
//! # Invariants
//! - `save` writes the person row only; phones and studies are persisted
//!   through their own repositories.
//! - Every loaded person carries its phones and studies.

use crate::model::person::{Gender, Person, PersonId};
use crate::repo::phone_repo::load_phones_of_person;
use crate::repo::study_repo::load_studies_of_person;
use crate::repo::{ensure_connection_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const PERSON_SELECT_SQL: &str = "SELECT
    identification,
    first_name,
    last_name,
    gender,
    age
FROM persons";

/// Persistence port for persons.
pub trait PersonRepository {
    /// Upserts by `identification` and returns the stored person.
    fn save(&self, person: &Person) -> RepoResult<Person>;
    /// Removes by `cc`; returns whether a row was removed.
    fn delete(&self, cc: PersonId) -> RepoResult<bool>;
    fn find_by_id(&self, cc: PersonId) -> RepoResult<Option<Person>>;
    fn find_all(&self) -> RepoResult<Vec<Person>>;
}

/// SQLite-backed person repository.
pub struct SqlitePersonRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePersonRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(
            conn,
            "persons",
            &["identification", "first_name", "last_name", "gender", "age"],
        )?;
        Ok(Self { conn })
    }

    fn attach_relations(&self, mut person: Person) -> RepoResult<Person> {
        person.phones = load_phones_of_person(self.conn, person.identification)?;
        person.studies = load_studies_of_person(self.conn, person.identification)?;
        Ok(person)
    }
}

impl PersonRepository for SqlitePersonRepository<'_> {
    fn save(&self, person: &Person) -> RepoResult<Person> {
        person.validate()?;

        self.conn.execute(
            "INSERT INTO persons (identification, first_name, last_name, gender, age)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT (identification) DO UPDATE SET
                first_name = excluded.first_name,
                last_name = excluded.last_name,
                gender = excluded.gender,
                age = excluded.age;",
            params![
                person.identification,
                person.first_name.as_str(),
                person.last_name.as_str(),
                person.gender.as_str(),
                person.age,
            ],
        )?;

        self.find_by_id(person.identification)?.ok_or_else(|| {
            RepoError::InvalidData(format!(
                "person {} missing after save",
                person.identification
            ))
        })
    }

    fn delete(&self, cc: PersonId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM persons WHERE identification = ?1;", [cc])?;
        Ok(changed > 0)
    }

    fn find_by_id(&self, cc: PersonId) -> RepoResult<Option<Person>> {
        let found = {
            let mut stmt = self
                .conn
                .prepare(&format!("{PERSON_SELECT_SQL} WHERE identification = ?1;"))?;
            let mut rows = stmt.query([cc])?;
            match rows.next()? {
                Some(row) => Some(parse_person_row(row)?),
                None => None,
            }
        };

        found.map(|person| self.attach_relations(person)).transpose()
    }

    fn find_all(&self) -> RepoResult<Vec<Person>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PERSON_SELECT_SQL} ORDER BY identification ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut persons = Vec::new();
        while let Some(row) = rows.next()? {
            persons.push(parse_person_row(row)?);
        }

        persons
            .into_iter()
            .map(|person| self.attach_relations(person))
            .collect()
    }
}

fn parse_person_row(row: &Row<'_>) -> RepoResult<Person> {
    let gender_text: String = row.get("gender")?;
    Ok(Person {
        identification: row.get("identification")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        gender: parse_gender(&gender_text)?,
        age: row.get("age")?,
        phones: Vec::new(),
        studies: Vec::new(),
    })
}

pub(crate) fn parse_gender(value: &str) -> RepoResult<Gender> {
    Gender::parse(value).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid gender `{value}` in persons.gender"))
    })
}
