use super::Statement;

use carto_core::Criteria;

/// `DELETE FROM table [WHERE …]`.
#[derive(Debug, Clone)]
pub struct Delete {
    pub table: String,
    pub criteria: Criteria,
}

impl Delete {
    pub fn new(table: impl Into<String>, criteria: Criteria) -> Self {
        Self {
            table: table.into(),
            criteria,
        }
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
