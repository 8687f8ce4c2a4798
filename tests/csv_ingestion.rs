use collection_transformer::ingestion::csv::{
    read_emails_csv_from_path, read_emails_csv_from_reader, read_people_csv_from_path,
    read_people_csv_from_reader,
};
use collection_transformer::types::Person;

fn reader(input: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes())
}

#[test]
fn read_people_csv_from_path_happy_path() {
    let people = read_people_csv_from_path("tests/fixtures/people.csv").unwrap();

    assert_eq!(people.len(), 5);
    assert_eq!(people[0], Person::new("Harry", 13));
    assert_eq!(people[4], Person::new("Arthur", 50));
}

#[test]
fn read_people_csv_allows_reordered_and_extra_columns() {
    let mut rdr = reader("house,age,name\nGryffindor,16,Ginny\n");
    let people = read_people_csv_from_reader(&mut rdr).unwrap();
    assert_eq!(people, vec![Person::new("Ginny", 16)]);
}

#[test]
fn read_people_csv_errors_on_missing_required_column() {
    let mut rdr = reader("name\nGinny\n");
    let err = read_people_csv_from_reader(&mut rdr).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("schema mismatch"));
    assert!(msg.contains("missing required column 'age'"));
}

#[test]
fn read_people_csv_errors_on_non_integer_age() {
    let mut rdr = reader("name,age\nGinny,16\nPercy,nineteen\n");
    let err = read_people_csv_from_reader(&mut rdr).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("failed to parse value at row 3"));
    assert!(msg.contains("column 'age'"));
}

#[test]
fn read_emails_csv_keeps_empty_cells_as_none() {
    let emails = read_emails_csv_from_path("tests/fixtures/emails.csv").unwrap();
    assert_eq!(
        emails,
        vec![
            None,
            Some("a@x.com".to_string()),
            Some("a@x.com".to_string()),
            None,
            Some("b@x.com".to_string()),
        ]
    );
}

#[test]
fn read_emails_csv_errors_without_email_column() {
    let mut rdr = reader("id\n1\n");
    let err = read_emails_csv_from_reader(&mut rdr).unwrap_err();
    assert!(err.to_string().contains("missing required column 'email'"));
}
