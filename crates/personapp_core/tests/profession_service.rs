use personapp_core::db::open_db_in_memory;
use personapp_core::{
    Action, EntityKey, Profession, ProfessionService, ServiceError, SqliteProfessionRepository,
};
use rusqlite::Connection;

fn setup() -> Connection {
    open_db_in_memory().unwrap()
}

fn profession_service(conn: &Connection) -> ProfessionService<SqliteProfessionRepository<'_>> {
    ProfessionService::new(SqliteProfessionRepository::try_new(conn).unwrap())
}

#[test]
fn create_edit_and_reject_missing_identification() {
    let conn = setup();
    let service = profession_service(&conn);

    let created = service.create(Profession::new(7, "Engineer")).unwrap();
    assert_eq!(created, Profession::new(7, "Engineer"));

    let edited = service
        .edit(7, Profession::new(99, "Senior Engineer"))
        .unwrap();
    assert_eq!(edited, Profession::new(7, "Senior Engineer"));
    assert!(service.find_one(99).unwrap_err().is_not_found());

    let err = service
        .edit(8, Profession::new(8, "Architect"))
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::NotFound {
            key: EntityKey::Profession(8),
            action: Action::Edit,
        }
    ));
    assert_eq!(service.count().unwrap(), 1);
}

#[test]
fn create_twice_with_same_identification_keeps_last_write() {
    let conn = setup();
    let service = profession_service(&conn);

    service.create(Profession::new(3, "Nurse")).unwrap();
    service
        .create(Profession::new(3, "Nurse").with_description("Registered nurse"))
        .unwrap();

    assert_eq!(service.count().unwrap(), 1);
    assert_eq!(
        service.find_one(3).unwrap().description.as_deref(),
        Some("Registered nurse")
    );
}

#[test]
fn drop_requires_existing_profession() {
    let conn = setup();
    let service = profession_service(&conn);
    service.create(Profession::new(3, "Nurse")).unwrap();

    let err = service.drop(4).unwrap_err();
    assert_eq!(
        err.to_string(),
        "profession 4 does not exist; cannot drop"
    );

    assert!(service.drop(3).unwrap());
    assert!(service.find_all().unwrap().is_empty());
}

#[test]
fn find_all_is_ordered_and_count_matches() {
    let conn = setup();
    let service = profession_service(&conn);
    for (id, name) in [(30, "Lawyer"), (10, "Doctor"), (20, "Teacher")] {
        service.create(Profession::new(id, name)).unwrap();
    }

    let all = service.find_all().unwrap();
    assert_eq!(
        all.iter().map(|p| p.identification).collect::<Vec<_>>(),
        vec![10, 20, 30]
    );
    assert_eq!(service.count().unwrap(), all.len());
}
