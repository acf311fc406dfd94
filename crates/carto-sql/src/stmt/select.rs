use super::Statement;

use carto_core::{engine::SortDirection, Criteria};

/// Offset/count pagination window. Both values are validated non-negative
/// before a `Limit` can exist, so rendering them inline is safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    pub offset: u64,
    pub max_results: u64,
}

/// `SELECT * FROM table [WHERE …] [ORDER BY …] [LIMIT offset, count]`.
///
/// Criteria keys are storage column names, not record fields.
#[derive(Debug, Clone)]
pub struct Select {
    pub table: String,
    pub criteria: Criteria,
    pub order_by: Option<(String, SortDirection)>,
    pub limit: Option<Limit>,
}

impl Select {
    pub fn new(table: impl Into<String>, criteria: Criteria) -> Self {
        Self {
            table: table.into(),
            criteria,
            order_by: None,
            limit: None,
        }
    }

    pub fn order_by(mut self, column: impl Into<String>, direction: SortDirection) -> Self {
        self.order_by = Some((column.into(), direction));
        self
    }

    pub fn limit(mut self, offset: u64, max_results: u64) -> Self {
        self.limit = Some(Limit {
            offset,
            max_results,
        });
        self
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
