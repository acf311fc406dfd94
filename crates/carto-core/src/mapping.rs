use crate::{record::RecordData, Error, Record, Result, Row, Value};

use indexmap::IndexMap;
use std::sync::Arc;

/// Converts a record into one storage column/value pair.
pub type ToStorageFn = Arc<dyn Fn(&Record) -> Result<(String, Value)> + Send + Sync>;

/// Converts a storage row into one record field/value pair.
pub type FromStorageFn = Arc<dyn Fn(&Row) -> Result<(String, Value)> + Send + Sync>;

/// How one record field corresponds to storage.
#[derive(Clone)]
pub enum ColumnMap {
    /// The field maps 1:1 onto the named column; values are copied
    /// verbatim with the key renamed.
    Direct(String),

    /// The field is derived: a pair of pure functions converts in each
    /// direction. Each function sees the whole record (or row) and must
    /// produce exactly one column/value (or field/value) pair.
    Transform {
        to_storage: ToStorageFn,
        from_storage: FromStorageFn,
    },
}

impl ColumnMap {
    pub fn is_direct(&self) -> bool {
        matches!(self, Self::Direct(_))
    }
}

impl core::fmt::Debug for ColumnMap {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Direct(column) => f.debug_tuple("Direct").field(column).finish(),
            Self::Transform { .. } => f.write_str("Transform"),
        }
    }
}

/// The declarative correspondence between record fields and storage
/// columns for one mapper. Declared once per mapper, immutable after.
#[derive(Debug, Clone, Default)]
pub struct ColumnMapping {
    entries: IndexMap<String, ColumnMap>,
}

impl ColumnMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `field` onto the column of the same name.
    pub fn same(self, field: impl Into<String>) -> Self {
        let field = field.into();
        let column = field.clone();
        self.direct(field, column)
    }

    /// Maps `field` onto `column`.
    pub fn direct(mut self, field: impl Into<String>, column: impl Into<String>) -> Self {
        self.entries
            .insert(field.into(), ColumnMap::Direct(column.into()));
        self
    }

    /// Maps `field` through a transform-function pair.
    pub fn transform(
        mut self,
        field: impl Into<String>,
        to_storage: impl Fn(&Record) -> Result<(String, Value)> + Send + Sync + 'static,
        from_storage: impl Fn(&Row) -> Result<(String, Value)> + Send + Sync + 'static,
    ) -> Self {
        self.entries.insert(
            field.into(),
            ColumnMap::Transform {
                to_storage: Arc::new(to_storage),
                from_storage: Arc::new(from_storage),
            },
        );
        self
    }

    pub fn get(&self, field: &str) -> Option<&ColumnMap> {
        self.entries.get(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnMap)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The storage column `field` maps directly onto, if its mapping is
    /// [`ColumnMap::Direct`].
    pub fn direct_column(&self, field: &str) -> Option<&str> {
        match self.entries.get(field)? {
            ColumnMap::Direct(column) => Some(column),
            ColumnMap::Transform { .. } => None,
        }
    }

    /// Converts a record into a storage row, applying every declared
    /// mapping in order.
    pub fn to_storage(&self, record: &Record) -> Result<Row> {
        let mut row = Row::new();

        for (field, map) in &self.entries {
            match map {
                ColumnMap::Direct(column) => {
                    row.insert(column.clone(), record.get(field)?.clone());
                }
                ColumnMap::Transform { to_storage, .. } => {
                    let (column, value) = to_storage(record).map_err(|err| {
                        err.context(Error::invalid_column_mapping(format!(
                            "to-storage transform failed for field `{field}`"
                        )))
                    })?;
                    row.insert(column, value);
                }
            }
        }

        Ok(row)
    }

    /// Converts a storage row back into record data. Direct-mapped columns
    /// missing from the row surface as `Null`.
    pub fn from_storage(&self, row: &Row) -> Result<RecordData> {
        let mut data = RecordData::new();

        for (field, map) in &self.entries {
            match map {
                ColumnMap::Direct(column) => {
                    let value = row.get(column).cloned().unwrap_or(Value::Null);
                    data.insert(field.clone(), value);
                }
                ColumnMap::Transform { from_storage, .. } => {
                    let (field_name, value) = from_storage(row).map_err(|err| {
                        err.context(Error::invalid_column_mapping(format!(
                            "from-storage transform failed for field `{field}`"
                        )))
                    })?;
                    data.insert(field_name, value);
                }
            }
        }

        Ok(data)
    }
}
