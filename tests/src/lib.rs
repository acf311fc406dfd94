use carto::sqlite::{Connection, Sqlite};
use carto::{
    ColumnMapping, DataMapper, Error, FieldConstraints, MapperConfig, Record, RecordData, Schema,
    Value,
};

use std::sync::Arc;

const ITEMS_TABLE: &str = "CREATE TABLE items (
    id INTEGER PRIMARY KEY,
    size TEXT NOT NULL,
    name TEXT,
    item_id TEXT,
    created_utc TEXT NOT NULL,
    updated_utc TEXT NOT NULL
);";

/// The item record type used across the integration tests: a required
/// `size` with a fixed value set, a free-text `name`, and an `itemId`
/// whose stored form carries an `ext-` prefix.
pub fn item_schema() -> Arc<Schema> {
    Arc::new(
        Schema::builder()
            .field("id", FieldConstraints::new())
            .field(
                "size",
                FieldConstraints::new()
                    .required()
                    .allowed_values(["small", "medium", "large"]),
            )
            .field("name", FieldConstraints::new())
            .field("itemId", FieldConstraints::new())
            .build()
            .unwrap(),
    )
}

pub fn item_mapping() -> ColumnMapping {
    ColumnMapping::new()
        .same("id")
        .same("size")
        .same("name")
        .transform(
            "itemId",
            |record| {
                let value = match record.get("itemId")? {
                    Value::Null => Value::Null,
                    Value::String(v) => Value::from(format!("ext-{v}")),
                    other => {
                        return Err(Error::invalid_column_mapping(format!(
                            "itemId must be text; value={other:?}"
                        )))
                    }
                };
                Ok(("item_id".to_string(), value))
            },
            |row| {
                let value = match row.get("item_id") {
                    Some(Value::String(stored)) => {
                        Value::from(stored.strip_prefix("ext-").unwrap_or(stored))
                    }
                    _ => Value::Null,
                };
                Ok(("itemId".to_string(), value))
            },
        )
}

pub fn item(id: Option<i64>, size: &str, name: &str, item_id: &str) -> Record {
    let mut data = RecordData::new();
    if let Some(id) = id {
        data.insert("id".to_string(), id.into());
    }
    data.insert("size".to_string(), size.into());
    data.insert("name".to_string(), name.into());
    data.insert("itemId".to_string(), item_id.into());
    Record::create(item_schema(), data).unwrap()
}

/// An item mapper plus a raw handle on the connection backing it, for
/// asserting directly against stored rows.
pub struct TestDb {
    pub mapper: DataMapper,
    pub conn: Arc<Connection>,
}

impl TestDb {
    /// A fresh in-memory database with an empty `items` table.
    pub fn empty() -> Self {
        let conn = Arc::new(Sqlite::in_memory().connect().unwrap());
        conn.execute_batch(ITEMS_TABLE).unwrap();

        let mapper = DataMapper::new(
            conn.clone(),
            MapperConfig {
                table: "items".to_string(),
                schema: item_schema(),
                mapping: item_mapping(),
            },
        );

        Self { mapper, conn }
    }

    /// A database seeded with four items of known ids and sizes.
    pub fn seeded() -> Self {
        let db = Self::empty();
        db.mapper
            .insert_many(&[
                item(Some(1), "medium", "thing1", "ref1"),
                item(Some(2), "large", "thing2", "ref2"),
                item(Some(4), "small", "thing3", "ref3"),
                item(Some(9), "large", "thing4", "ref4"),
            ])
            .unwrap();
        db
    }
}

/// The ids of `records`, in order.
pub fn ids(records: &[Record]) -> Vec<i64> {
    records
        .iter()
        .map(|record| record.identity().as_i64().unwrap())
        .collect()
}
