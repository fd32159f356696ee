use personapp_core::db::open_db_in_memory;
use personapp_core::{
    Action, EntityKey, Gender, Person, PersonService, Phone, PhoneService, Profession,
    ProfessionService, ServiceError, SqlitePersonRepository, SqlitePhoneRepository,
    SqliteProfessionRepository, SqliteStudyRepository, Study, StudyService,
};
use rusqlite::Connection;

fn setup() -> Connection {
    open_db_in_memory().unwrap()
}

fn person_service(conn: &Connection) -> PersonService<SqlitePersonRepository<'_>> {
    PersonService::new(SqlitePersonRepository::try_new(conn).unwrap())
}

fn ana() -> Person {
    Person::new(1001, "Ana", "Ruiz", Gender::Female).with_age(31)
}

#[test]
fn create_then_find_one_returns_saved_person() {
    let conn = setup();
    let service = person_service(&conn);

    let created = service.create(ana()).unwrap();
    assert_eq!(created, ana());

    let loaded = service.find_one(1001).unwrap();
    assert_eq!(loaded.full_name(), "Ana Ruiz");
    assert_eq!(loaded.age, Some(31));
    assert!(loaded.phones.is_empty());
    assert!(loaded.studies.is_empty());
}

#[test]
fn create_twice_with_same_cc_keeps_last_write() {
    let conn = setup();
    let service = person_service(&conn);

    service.create(ana()).unwrap();
    let second = Person::new(1001, "Ana Maria", "Ruiz", Gender::Female);
    service.create(second).unwrap();

    assert_eq!(service.count().unwrap(), 1);
    assert_eq!(service.find_one(1001).unwrap().first_name, "Ana Maria");
}

#[test]
fn edit_existing_person_replaces_record() {
    let conn = setup();
    let service = person_service(&conn);
    service.create(ana()).unwrap();

    let mut replacement = ana();
    replacement.last_name = "Gomez".to_string();
    replacement.age = None;
    let edited = service.edit(1001, replacement).unwrap();

    assert_eq!(edited.last_name, "Gomez");
    assert_eq!(edited.age, None);
    assert_eq!(service.find_one(1001).unwrap().last_name, "Gomez");
}

#[test]
fn edit_missing_person_is_not_found_and_store_is_unchanged() {
    let conn = setup();
    let service = person_service(&conn);
    service.create(ana()).unwrap();

    let err = service
        .edit(2002, Person::new(2002, "Luis", "Mora", Gender::Male))
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::NotFound {
            key: EntityKey::Person(2002),
            action: Action::Edit,
        }
    ));
    assert_eq!(service.count().unwrap(), 1);
    assert!(service.find_one(2002).is_err());
}

#[test]
fn edit_saves_payload_identity_as_given() {
    let conn = setup();
    let service = person_service(&conn);
    service.create(ana()).unwrap();

    let edited = service
        .edit(1001, Person::new(3003, "Eva", "Lara", Gender::Other))
        .unwrap();

    assert_eq!(edited.identification, 3003);
    assert_eq!(service.count().unwrap(), 2);
    assert_eq!(service.find_one(1001).unwrap().first_name, "Ana");
}

#[test]
fn drop_existing_person_removes_it() {
    let conn = setup();
    let service = person_service(&conn);
    service.create(ana()).unwrap();

    assert!(service.drop(1001).unwrap());
    assert_eq!(service.count().unwrap(), 0);

    let err = service.drop(1001).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn count_matches_find_all_length() {
    let conn = setup();
    let service = person_service(&conn);
    assert_eq!(service.count().unwrap(), 0);

    service.create(ana()).unwrap();
    service
        .create(Person::new(7, "Luis", "Mora", Gender::Male))
        .unwrap();

    let all = service.find_all().unwrap();
    assert_eq!(service.count().unwrap(), all.len());
    assert_eq!(
        all.iter().map(|p| p.identification).collect::<Vec<_>>(),
        vec![7, 1001]
    );
}

#[test]
fn get_phones_returns_phones_materialized_on_person() {
    let conn = setup();
    let service = person_service(&conn);
    let phones = PhoneService::new(SqlitePhoneRepository::try_new(&conn).unwrap());

    service.create(ana()).unwrap();
    phones.create(Phone::new("555-1000", "Claro", 1001)).unwrap();
    phones.create(Phone::new("555-0999", "Movistar", 1001)).unwrap();

    let numbers: Vec<_> = service
        .get_phones(1001)
        .unwrap()
        .into_iter()
        .map(|phone| phone.number)
        .collect();
    assert_eq!(numbers, vec!["555-0999", "555-1000"]);
}

#[test]
fn get_studies_returns_studies_materialized_on_person() {
    let conn = setup();
    let service = person_service(&conn);
    let professions = ProfessionService::new(SqliteProfessionRepository::try_new(&conn).unwrap());
    let studies = StudyService::new(SqliteStudyRepository::try_new(&conn).unwrap());

    let person = service.create(ana()).unwrap();
    let profession = professions
        .create(Profession::new(7, "Engineer"))
        .unwrap();
    studies.create(Study::new(person, profession)).unwrap();

    let loaded = service.get_studies(1001).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].profession.name, "Engineer");
    assert_eq!(loaded[0].person.identification, 1001);
}

#[test]
fn get_phones_and_studies_of_missing_person_are_not_found() {
    let conn = setup();
    let service = person_service(&conn);

    let err = service.get_studies(42).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::NotFound {
            key: EntityKey::Person(42),
            action: Action::GetStudies,
        }
    ));
    assert_eq!(err.to_string(), "person 42 does not exist; cannot get studies");

    let err = service.get_phones(42).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::NotFound {
            action: Action::GetPhones,
            ..
        }
    ));
}

#[test]
fn invalid_identity_surfaces_as_repository_error() {
    let conn = setup();
    let service = person_service(&conn);

    let err = service
        .create(Person::new(0, "No", "Body", Gender::Other))
        .unwrap_err();
    assert!(matches!(err, ServiceError::Repo(_)));
    assert!(err.to_string().contains("must be positive"));
}
