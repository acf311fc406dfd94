use pretty_assertions::assert_eq;
use tests::{item, TestDb};

use carto::{Criteria, Engine, Value};

#[test]
fn transformed_fields_round_trip() {
    let db = TestDb::empty();

    let saved = db.mapper.save(item(None, "small", "widget", "w1")).unwrap();
    let reloaded = db
        .mapper
        .find_by_id(saved.identity().clone())
        .unwrap()
        .unwrap();

    assert_eq!(reloaded.get("itemId").unwrap().as_str(), Some("w1"));
}

#[test]
fn transformed_fields_are_stored_in_column_form() {
    let db = TestDb::empty();

    let saved = db.mapper.save(item(None, "small", "widget", "w1")).unwrap();

    let row = db
        .conn
        .fetch_row(
            "items",
            &Criteria::new().with("id", saved.identity().clone()),
        )
        .unwrap()
        .unwrap();
    assert_eq!(row.get("item_id"), Some(&Value::String("ext-w1".to_string())));
}

#[test]
fn transformed_fields_cannot_be_sorted_on() {
    let db = TestDb::seeded();

    let err = db
        .mapper
        .generate_page("itemId", "asc", 0, 10, Criteria::new())
        .unwrap_err();
    assert!(err.is_unsortable_field());
}

#[test]
fn transformed_fields_cannot_be_filtered_on() {
    let db = TestDb::seeded();

    let err = db
        .mapper
        .count(Criteria::new().with("itemId", "ref1"))
        .unwrap_err();
    assert!(err.is_unmappable_criteria());
}
