use pretty_assertions::assert_eq;
use tests::{item_schema, TestDb};

use carto::{Record, RecordData, Value};

fn data(pairs: &[(&str, Value)]) -> RecordData {
    pairs
        .iter()
        .map(|(field, value)| (field.to_string(), value.clone()))
        .collect()
}

#[test]
fn records_outside_the_schema_never_reach_storage() {
    let db = TestDb::empty();

    let err = Record::create(item_schema(), data(&[("size", Value::from("enormous"))]))
        .unwrap_err();
    let errors = err.as_validation_errors().unwrap();
    assert_eq!(
        errors.get("size"),
        Some("This field should have one of the following values: {small, medium, large}")
    );

    assert_eq!(db.mapper.count(carto::Criteria::new()).unwrap(), 0);
}

#[test]
fn missing_required_fields_are_reported() {
    let err = Record::create(item_schema(), data(&[("name", Value::from("widget"))]))
        .unwrap_err();
    let errors = err.as_validation_errors().unwrap();
    assert_eq!(errors.get("size"), Some("This field is required"));
}

#[test]
fn setting_an_invalid_value_is_rejected() {
    let db = TestDb::seeded();

    let mut record = db.mapper.find_by_id(1).unwrap().unwrap();
    let err = record.set("size", "enormous").unwrap_err();
    assert!(err.is_validation());

    // The record keeps its previous value.
    assert_eq!(record.get("size").unwrap().as_str(), Some("medium"));
}
