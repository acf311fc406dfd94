use super::Statement;

use carto_core::Criteria;

/// `SELECT COUNT(*) AS num FROM table [WHERE …]`.
#[derive(Debug, Clone)]
pub struct Count {
    pub table: String,
    pub criteria: Criteria,
}

impl Count {
    pub fn new(table: impl Into<String>, criteria: Criteria) -> Self {
        Self {
            table: table.into(),
            criteria,
        }
    }
}

impl From<Count> for Statement {
    fn from(value: Count) -> Self {
        Self::Count(value)
    }
}
