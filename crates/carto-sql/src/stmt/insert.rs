use super::Statement;

use carto_core::Value;

/// `INSERT INTO table (columns…) VALUES (…), (…), …`.
///
/// Every row must supply one value per column; the column set is shared
/// across the whole batch.
#[derive(Debug, Clone)]
pub struct Insert {
    pub table: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Insert {
    pub fn new(table: impl Into<String>, columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self {
            table: table.into(),
            columns,
            rows,
        }
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
