use pretty_assertions::assert_eq;
use tests::{ids, item, TestDb};

use carto::{Criteria, Criterion};

#[test]
fn full_page_sorted_by_size() {
    let db = TestDb::seeded();
    let page = db
        .mapper
        .generate_page("size", "asc", 0, 10, Criteria::new())
        .unwrap();

    let sizes: Vec<_> = page
        .iter()
        .map(|record| record.get("size").unwrap().as_str().unwrap().to_string())
        .collect();
    assert_eq!(sizes, ["large", "large", "medium", "small"]);

    // The two large items sort together ahead of the rest.
    let mut large_ids = ids(&page[..2]);
    large_ids.sort();
    assert_eq!(large_ids, [2, 9]);
    assert_eq!(ids(&page[2..]), [1, 4]);
}

#[test]
fn filtered_page_with_offset() {
    let db = TestDb::seeded();
    let page = db
        .mapper
        .generate_page("id", "asc", 1, 2, Criteria::new().with("size", "large"))
        .unwrap();

    assert_eq!(ids(&page), [9]);
}

#[test]
fn offset_windows_the_result() {
    let db = TestDb::seeded();
    let page = db
        .mapper
        .generate_page("id", "asc", 1, 2, Criteria::new())
        .unwrap();

    assert_eq!(ids(&page), [2, 4]);
}

#[test]
fn descending_reverses_ascending() {
    let db = TestDb::seeded();
    let asc = db
        .mapper
        .generate_page("id", "ASC", 0, 10, Criteria::new())
        .unwrap();
    let desc = db
        .mapper
        .generate_page("id", "desc", 0, 10, Criteria::new())
        .unwrap();

    let mut reversed = ids(&desc);
    reversed.reverse();
    assert_eq!(ids(&asc), reversed);
    assert_eq!(ids(&desc), [9, 4, 2, 1]);

    // With a non-unique sort key the groups reverse; order within a tied
    // group is unspecified.
    let by_size = db
        .mapper
        .generate_page("size", "desc", 0, 10, Criteria::new())
        .unwrap();
    let sizes: Vec<_> = by_size
        .iter()
        .map(|record| record.get("size").unwrap().as_str().unwrap().to_string())
        .collect();
    assert_eq!(sizes, ["small", "medium", "large", "large"]);
    let mut large_ids = ids(&by_size[2..]);
    large_ids.sort();
    assert_eq!(large_ids, [2, 9]);
}

#[test]
fn comparison_and_membership_criteria() {
    let db = TestDb::seeded();

    let small_or_medium = Criteria::new()
        .with("size", Criterion::In(vec!["small".into(), "medium".into()]));
    assert_eq!(db.mapper.count(small_or_medium).unwrap(), 2);

    let early = Criteria::new().with("id", Criterion::LessThan(4.into()));
    let page = db
        .mapper
        .generate_page("id", "asc", 0, 10, early)
        .unwrap();
    assert_eq!(ids(&page), [1, 2]);

    let named = Criteria::new().with("name", Criterion::IsNotNull);
    assert_eq!(db.mapper.count(named).unwrap(), 4);
    let nameless = Criteria::new().with("name", Criterion::IsNull);
    assert_eq!(db.mapper.count(nameless).unwrap(), 0);
}

#[test]
fn string_sort_ignores_case() {
    let db = TestDb::empty();
    db.mapper
        .insert_many(&[
            item(Some(1), "small", "Zebra", "ref1"),
            item(Some(2), "small", "apple", "ref2"),
            item(Some(3), "small", "Mango", "ref3"),
        ])
        .unwrap();

    let page = db
        .mapper
        .generate_page("name", "asc", 0, 10, Criteria::new())
        .unwrap();

    assert_eq!(ids(&page), [2, 3, 1]);
}

#[test]
fn empty_criteria_matches_everything() {
    let db = TestDb::seeded();
    assert_eq!(db.mapper.count(Criteria::new()).unwrap(), 4);
    assert_eq!(
        db.mapper
            .count(Criteria::new().with("size", "large"))
            .unwrap(),
        2
    );
}

#[test]
fn page_past_the_end_is_empty() {
    let db = TestDb::seeded();
    let page = db
        .mapper
        .generate_page("id", "asc", 100, 10, Criteria::new())
        .unwrap();
    assert!(page.is_empty());
}

#[test]
fn bad_page_arguments_are_rejected() {
    let db = TestDb::seeded();

    let err = db
        .mapper
        .generate_page("id", "sideways", 0, 10, Criteria::new())
        .unwrap_err();
    assert!(err.is_invalid_sort_direction());

    let err = db
        .mapper
        .generate_page("id", "asc", -1, 10, Criteria::new())
        .unwrap_err();
    assert!(err.is_invalid_offset());

    let err = db
        .mapper
        .generate_page("id", "asc", 0, -1, Criteria::new())
        .unwrap_err();
    assert!(err.is_invalid_max_results());
}

#[test]
fn criteria_against_undeclared_fields_are_rejected() {
    let db = TestDb::seeded();
    let err = db
        .mapper
        .count(Criteria::new().with("colour", "red"))
        .unwrap_err();
    assert!(err.is_unknown_field());
}
