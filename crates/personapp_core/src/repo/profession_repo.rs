//! Profession repository contract and SQLite implementation.

use crate::model::profession::{Profession, ProfessionId};
use crate::repo::{ensure_connection_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const PROFESSION_SELECT_SQL: &str = "SELECT identification, name, description FROM professions";

/// Persistence port for professions.
pub trait ProfessionRepository {
    /// Upserts by `identification` and returns the stored profession.
    fn save(&self, profession: &Profession) -> RepoResult<Profession>;
    fn delete(&self, identification: ProfessionId) -> RepoResult<bool>;
    fn find_by_id(&self, identification: ProfessionId) -> RepoResult<Option<Profession>>;
    fn find_all(&self) -> RepoResult<Vec<Profession>>;
}

/// SQLite-backed profession repository.
pub struct SqliteProfessionRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProfessionRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(
            conn,
            "professions",
            &["identification", "name", "description"],
        )?;
        Ok(Self { conn })
    }
}

impl ProfessionRepository for SqliteProfessionRepository<'_> {
    fn save(&self, profession: &Profession) -> RepoResult<Profession> {
        profession.validate()?;

        self.conn.execute(
            "INSERT INTO professions (identification, name, description)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (identification) DO UPDATE SET
                name = excluded.name,
                description = excluded.description;",
            params![
                profession.identification,
                profession.name.as_str(),
                profession.description.as_deref(),
            ],
        )?;

        self.find_by_id(profession.identification)?.ok_or_else(|| {
            RepoError::InvalidData(format!(
                "profession {} missing after save",
                profession.identification
            ))
        })
    }

    fn delete(&self, identification: ProfessionId) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "DELETE FROM professions WHERE identification = ?1;",
            [identification],
        )?;
        Ok(changed > 0)
    }

    fn find_by_id(&self, identification: ProfessionId) -> RepoResult<Option<Profession>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROFESSION_SELECT_SQL} WHERE identification = ?1;"))?;
        let mut rows = stmt.query([identification])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_profession_row(row)?));
        }
        Ok(None)
    }

    fn find_all(&self) -> RepoResult<Vec<Profession>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROFESSION_SELECT_SQL} ORDER BY identification ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut professions = Vec::new();
        while let Some(row) = rows.next()? {
            professions.push(parse_profession_row(row)?);
        }
        Ok(professions)
    }
}

fn parse_profession_row(row: &Row<'_>) -> RepoResult<Profession> {
    Ok(Profession {
        identification: row.get("identification")?,
        name: row.get("name")?,
        description: row.get("description")?,
    })
}
