use super::Statement;

use carto_core::Value;

/// `SELECT created_utc, updated_utc FROM table WHERE id = … LIMIT 1`.
#[derive(Debug, Clone)]
pub struct SelectDates {
    pub table: String,
    pub id: Value,
}

impl SelectDates {
    pub fn new(table: impl Into<String>, id: Value) -> Self {
        Self {
            table: table.into(),
            id,
        }
    }
}

impl From<SelectDates> for Statement {
    fn from(value: SelectDates) -> Self {
        Self::SelectDates(value)
    }
}
