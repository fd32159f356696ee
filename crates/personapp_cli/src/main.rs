//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `personapp_core` linkage and database bootstrap.
//! - Print per-entity record counts through the use-case services.
//!
//! # Environment
//! - `PERSONAPP_DB_PATH`: database file (defaults to the temp directory).
//! - `PERSONAPP_LOG_DIR`: absolute log directory; logging is off when unset.
//! - `PERSONAPP_LOG_LEVEL`: overrides the build-mode default level.

use personapp_core::db::open_db;
use personapp_core::{
    PersonService, PhoneService, ProfessionService, ServiceResult, SqlitePersonRepository,
    SqlitePhoneRepository, SqliteProfessionRepository, SqliteStudyRepository, StudyService,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const DEFAULT_DB_FILE_NAME: &str = "personapp.sqlite3";

/// Record totals printed by the probe.
struct Counts {
    persons: usize,
    phones: usize,
    professions: usize,
    studies: usize,
}

fn main() -> ExitCode {
    println!("personapp_core ping={}", personapp_core::ping());
    println!("personapp_core version={}", personapp_core::core_version());

    if let Some(log_dir) = env_value("PERSONAPP_LOG_DIR") {
        let level = env_value("PERSONAPP_LOG_LEVEL")
            .unwrap_or_else(|| personapp_core::default_log_level().to_string());
        if let Err(err) = personapp_core::init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let db_path = env_value("PERSONAPP_DB_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));

    match count_records(&db_path) {
        Ok(counts) => {
            println!("db={}", db_path.display());
            println!(
                "persons={} phones={} professions={} studies={}",
                counts.persons, counts.phones, counts.professions, counts.studies
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("event=cli_probe module=cli status=error error={err}");
            eprintln!("probe failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn count_records(db_path: &Path) -> Result<Counts, String> {
    let conn = open_db(db_path).map_err(|err| format!("database open failed: {err}"))?;
    let counts = || -> ServiceResult<Counts> {
        Ok(Counts {
            persons: PersonService::new(SqlitePersonRepository::try_new(&conn)?).count()?,
            phones: PhoneService::new(SqlitePhoneRepository::try_new(&conn)?).count()?,
            professions: ProfessionService::new(SqliteProfessionRepository::try_new(&conn)?)
                .count()?,
            studies: StudyService::new(SqliteStudyRepository::try_new(&conn)?).count()?,
        })
    };
    counts().map_err(|err| err.to_string())
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}
