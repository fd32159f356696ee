use personapp_core::{
    Gender, ModelValidationError, Person, Phone, Profession, Study, StudyKey,
};

#[test]
fn person_new_sets_defaults() {
    let person = Person::new(10, "Ana", "Ruiz", Gender::Female);

    assert_eq!(person.identification, 10);
    assert_eq!(person.age, None);
    assert!(person.phones.is_empty());
    assert!(person.studies.is_empty());
    assert_eq!(person.full_name(), "Ana Ruiz");
    assert!(person.validate().is_ok());
}

#[test]
fn validate_rejects_invalid_identities() {
    assert_eq!(
        Person::new(0, "A", "B", Gender::Male).validate(),
        Err(ModelValidationError::NonPositivePersonId(0))
    );
    assert_eq!(
        Phone::new("", "Claro", 1).validate(),
        Err(ModelValidationError::BlankPhoneNumber)
    );
    assert_eq!(
        Phone::new("555", "Claro", -1).validate(),
        Err(ModelValidationError::NonPositivePersonId(-1))
    );
    assert_eq!(
        Profession::new(-2, "X").validate(),
        Err(ModelValidationError::NonPositiveProfessionId(-2))
    );
}

#[test]
fn study_key_is_derived_from_embedded_records() {
    let study = Study::new(
        Person::new(4, "Luis", "Mora", Gender::Male),
        Profession::new(9, "Chemist"),
    );
    assert_eq!(study.key(), StudyKey::new(4, 9));
    assert!(study.validate().is_ok());
}

#[test]
fn person_serialization_uses_snake_case_fields() {
    let mut person = Person::new(10, "Ana", "Ruiz", Gender::Female).with_age(30);
    person.phones.push(Phone::new("555-1000", "Claro", 10));

    let json = serde_json::to_value(&person).unwrap();
    assert_eq!(json["identification"], 10);
    assert_eq!(json["first_name"], "Ana");
    assert_eq!(json["gender"], "female");
    assert_eq!(json["age"], 30);
    assert_eq!(json["phones"][0]["person_id"], 10);

    let decoded: Person = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, person);
}

#[test]
fn person_deserializes_without_related_lists() {
    let value = serde_json::json!({
        "identification": 5,
        "first_name": "Eva",
        "last_name": "Lara",
        "gender": "other",
        "age": null
    });

    let person: Person = serde_json::from_value(value).unwrap();
    assert_eq!(person.gender, Gender::Other);
    assert!(person.phones.is_empty());
    assert!(person.studies.is_empty());
}
