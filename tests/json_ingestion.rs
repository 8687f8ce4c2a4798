use collection_transformer::TransformError;
use collection_transformer::ingestion::json::{
    read_emails_json_from_path, read_emails_json_from_str, read_people_json_from_path,
    read_people_json_from_str,
};
use collection_transformer::types::Person;

#[test]
fn read_people_json_array_from_path_happy_path() {
    let people = read_people_json_from_path("tests/fixtures/people.json").unwrap();

    assert_eq!(people.len(), 5);
    assert_eq!(people[2], Person::new("Hermione", 14));
}

#[test]
fn read_people_ndjson_happy_path() {
    let people = read_people_json_from_path("tests/fixtures/people.ndjson").unwrap();
    assert_eq!(
        people,
        vec![Person::new("Ginny", 11), Person::new("Percy", 19)]
    );
}

#[test]
fn read_people_json_single_object() {
    let people = read_people_json_from_str(r#"{"name":"Luna","age":14}"#).unwrap();
    assert_eq!(people, vec![Person::new("Luna", 14)]);
}

#[test]
fn read_people_json_null_document_is_invalid_argument() {
    let err = read_people_json_from_str("null").unwrap_err();
    assert!(matches!(err, TransformError::InvalidArgument { .. }));
}

#[test]
fn read_people_json_errors_on_missing_field() {
    let err = read_people_json_from_str(r#"[{"name":"Luna"}]"#).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("schema mismatch"));
    assert!(msg.contains("missing required field 'age'"));
}

#[test]
fn read_people_json_errors_on_type_mismatch() {
    let err = read_people_json_from_str(r#"[{"name":"Luna","age":"fourteen"}]"#).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("failed to parse value"));
    assert!(msg.contains("column 'age'"));
}

#[test]
fn read_people_json_errors_on_empty_input() {
    let err = read_people_json_from_str("   ").unwrap_err();
    assert!(err.to_string().contains("json input is empty"));
}

#[test]
fn read_emails_json_keeps_nulls() {
    let emails = read_emails_json_from_path("tests/fixtures/emails.json").unwrap();
    assert_eq!(emails.len(), 5);
    assert_eq!(emails[0], None);
    assert_eq!(emails[1].as_deref(), Some("a@x.com"));
}

#[test]
fn read_emails_json_accepts_objects_and_ndjson() {
    let emails = read_emails_json_from_str(r#"[{"email":"a@x.com"},{"email":null}]"#).unwrap();
    assert_eq!(emails, vec![Some("a@x.com".to_string()), None]);

    let emails = read_emails_json_from_str("\"a@x.com\"\nnull\n\"b@x.com\"\n").unwrap();
    assert_eq!(
        emails,
        vec![Some("a@x.com".to_string()), None, Some("b@x.com".to_string())]
    );
}

#[test]
fn read_emails_json_rejects_numbers() {
    let err = read_emails_json_from_str("[1]").unwrap_err();
    assert!(err.to_string().contains("column 'email'"));
}
