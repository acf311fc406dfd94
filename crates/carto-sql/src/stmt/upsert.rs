use super::Statement;

use carto_core::Value;

/// A single-row insert-or-update-on-conflict statement.
///
/// Rendering is flavor-specific (`ON DUPLICATE KEY UPDATE` for MySQL,
/// `ON CONFLICT … DO UPDATE` for SQLite) but the observable state is the
/// same: a new row is inserted, or the columns in `update_columns` of the
/// existing row sharing the conflict column's value are reassigned from
/// the inserted values.
#[derive(Debug, Clone)]
pub struct Upsert {
    pub table: String,
    pub columns: Vec<String>,
    pub values: Vec<Value>,
    pub conflict_column: String,
    pub update_columns: Vec<String>,
}

impl From<Upsert> for Statement {
    fn from(value: Upsert) -> Self {
        Self::Upsert(value)
    }
}
