use pretty_assertions::assert_eq;
use tests::{item, TestDb};

use carto::Criteria;

#[test]
fn saving_a_new_record_assigns_an_identity() {
    let db = TestDb::empty();

    let saved = db.mapper.save(item(None, "small", "widget", "w1")).unwrap();

    assert!(saved.has_identity());
    assert_eq!(db.mapper.count(Criteria::new()).unwrap(), 1);

    let found = db
        .mapper
        .find_by_id(saved.identity().clone())
        .unwrap()
        .unwrap();
    assert_eq!(found.get("size").unwrap().as_str(), Some("small"));
    assert_eq!(found.get("name").unwrap().as_str(), Some("widget"));
}

#[test]
fn saving_an_existing_record_updates_in_place() {
    let db = TestDb::seeded();

    let mut record = db.mapper.find_by_id(4).unwrap().unwrap();
    record.set("size", "large").unwrap();
    db.mapper.save(record).unwrap();

    assert_eq!(db.mapper.count(Criteria::new()).unwrap(), 4);
    let reloaded = db.mapper.find_by_id(4).unwrap().unwrap();
    assert_eq!(reloaded.get("size").unwrap().as_str(), Some("large"));
}

#[test]
fn find_single_picks_at_most_one() {
    let db = TestDb::seeded();

    let found = db
        .mapper
        .find_single_from_criteria(Criteria::new().with("size", "medium"))
        .unwrap()
        .unwrap();
    assert_eq!(found.identity().as_i64(), Some(1));

    let found = db
        .mapper
        .find_single_from_criteria(Criteria::new().with("size", "tiny"))
        .unwrap();
    assert!(found.is_none());
}

#[test]
fn insert_many_writes_the_whole_batch() {
    let db = TestDb::empty();

    db.mapper
        .insert_many(&[
            item(None, "small", "a", "r1"),
            item(None, "medium", "b", "r2"),
            item(None, "large", "c", "r3"),
        ])
        .unwrap();

    assert_eq!(db.mapper.count(Criteria::new()).unwrap(), 3);

    db.mapper.insert_many(&[]).unwrap();
    assert_eq!(db.mapper.count(Criteria::new()).unwrap(), 3);
}

#[test]
fn delete_removes_exactly_one_row() {
    let db = TestDb::seeded();

    let record = db.mapper.find_by_id(2).unwrap().unwrap();
    db.mapper.delete(&record).unwrap();

    assert_eq!(db.mapper.count(Criteria::new()).unwrap(), 3);
    assert!(db.mapper.find_by_id(2).unwrap().is_none());
    assert!(db.mapper.find_by_id(9).unwrap().is_some());
}

#[test]
fn deleting_an_unsaved_record_is_an_error() {
    let db = TestDb::seeded();

    let err = db.mapper.delete(&item(None, "small", "x", "r")).unwrap_err();
    assert!(err.is_missing_identity());
    assert_eq!(db.mapper.count(Criteria::new()).unwrap(), 4);
}
