//! Phone repository contract and SQLite implementation.
//!
//! # Invariants
//! - `phones.person_id` references `persons`; saving a phone for an unknown
//!   owner fails with a foreign-key error from SQLite.

use crate::model::person::PersonId;
use crate::model::phone::Phone;
use crate::repo::{ensure_connection_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, Row, ToSql};

const PHONE_SELECT_SQL: &str = "SELECT number, company, person_id FROM phones";

/// Persistence port for phones.
pub trait PhoneRepository {
    /// Upserts by `number` and returns the stored phone.
    fn save(&self, phone: &Phone) -> RepoResult<Phone>;
    fn delete(&self, number: &str) -> RepoResult<bool>;
    fn find_by_id(&self, number: &str) -> RepoResult<Option<Phone>>;
    /// Lists phones owned by `person_id`; empty when none or owner unknown.
    fn find_by_person_id(&self, person_id: PersonId) -> RepoResult<Vec<Phone>>;
    fn find_all(&self) -> RepoResult<Vec<Phone>>;
}

/// SQLite-backed phone repository.
pub struct SqlitePhoneRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePhoneRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "phones", &["number", "company", "person_id"])?;
        Ok(Self { conn })
    }
}

impl PhoneRepository for SqlitePhoneRepository<'_> {
    fn save(&self, phone: &Phone) -> RepoResult<Phone> {
        phone.validate()?;

        self.conn.execute(
            "INSERT INTO phones (number, company, person_id)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (number) DO UPDATE SET
                company = excluded.company,
                person_id = excluded.person_id;",
            params![phone.number.as_str(), phone.company.as_str(), phone.person_id],
        )?;

        self.find_by_id(&phone.number)?.ok_or_else(|| {
            RepoError::InvalidData(format!("phone {} missing after save", phone.number))
        })
    }

    fn delete(&self, number: &str) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM phones WHERE number = ?1;", [number])?;
        Ok(changed > 0)
    }

    fn find_by_id(&self, number: &str) -> RepoResult<Option<Phone>> {
        let phones = query_phones(self.conn, "WHERE number = ?1", &[&number])?;
        Ok(phones.into_iter().next())
    }

    fn find_by_person_id(&self, person_id: PersonId) -> RepoResult<Vec<Phone>> {
        load_phones_of_person(self.conn, person_id)
    }

    fn find_all(&self) -> RepoResult<Vec<Phone>> {
        query_phones(self.conn, "", &[])
    }
}

pub(crate) fn load_phones_of_person(
    conn: &Connection,
    person_id: PersonId,
) -> RepoResult<Vec<Phone>> {
    query_phones(conn, "WHERE person_id = ?1", &[&person_id])
}

fn query_phones(conn: &Connection, filter: &str, args: &[&dyn ToSql]) -> RepoResult<Vec<Phone>> {
    let mut stmt = conn.prepare(&format!("{PHONE_SELECT_SQL} {filter} ORDER BY number ASC;"))?;
    let mut rows = stmt.query(args)?;
    let mut phones = Vec::new();
    while let Some(row) = rows.next()? {
        phones.push(parse_phone_row(row)?);
    }
    Ok(phones)
}

fn parse_phone_row(row: &Row<'_>) -> RepoResult<Phone> {
    Ok(Phone {
        number: row.get("number")?,
        company: row.get("company")?,
        person_id: row.get("person_id")?,
    })
}
