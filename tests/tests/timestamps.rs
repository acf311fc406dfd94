use pretty_assertions::assert_eq;
use tests::{item, TestDb};

#[test]
fn saved_records_have_creation_and_update_dates() {
    let db = TestDb::empty();

    let saved = db.mapper.save(item(None, "small", "widget", "w1")).unwrap();

    let created = db.mapper.date_created(&saved).unwrap().unwrap();
    let updated = db.mapper.date_updated(&saved).unwrap().unwrap();
    assert_eq!(created, updated);
}

#[test]
fn updating_preserves_the_creation_date() {
    let db = TestDb::empty();

    let mut saved = db.mapper.save(item(None, "small", "widget", "w1")).unwrap();
    let created = db.mapper.date_created(&saved).unwrap().unwrap();

    saved.set("size", "large").unwrap();
    let saved = db.mapper.save(saved).unwrap();

    assert_eq!(db.mapper.date_created(&saved).unwrap(), Some(created));
    let updated = db.mapper.date_updated(&saved).unwrap().unwrap();
    assert!(updated >= created);
}

#[test]
fn unsaved_records_have_no_dates() {
    let db = TestDb::empty();
    let record = item(None, "small", "widget", "w1");

    assert_eq!(db.mapper.date_created(&record).unwrap(), None);
    assert_eq!(db.mapper.date_updated(&record).unwrap(), None);
}

#[test]
fn dates_for_a_vanished_row_are_none() {
    let db = TestDb::seeded();

    let record = db.mapper.find_by_id(1).unwrap().unwrap();
    db.mapper.delete(&record).unwrap();

    assert_eq!(db.mapper.date_created(&record).unwrap(), None);
}
