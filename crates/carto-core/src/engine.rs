use crate::{Criteria, Error, Result, Row, Value};

use std::fmt::Debug;

/// Column holding every row's identity, by storage convention.
pub const ID_COLUMN: &str = "id";

/// Column holding every row's creation timestamp, by storage convention.
pub const CREATED_COLUMN: &str = "created_utc";

/// Column holding every row's last-update timestamp, by storage
/// convention.
pub const UPDATED_COLUMN: &str = "updated_utc";

/// Direction of an ORDER BY clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Parses a caller-supplied direction, case-insensitively.
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "ASC" => Ok(Self::Asc),
            "DESC" => Ok(Self::Desc),
            _ => Err(Error::invalid_sort_direction(s)),
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// One row of an insert-or-update operation, in column space.
///
/// `columns` and `values` pair up positionally. `update_columns` is the
/// subset assigned when the row already exists; the creation timestamp is
/// left out of it so updates never touch it. `identity` carries the
/// record's current id value when it has one; when `None`, the engine
/// reports the storage-assigned identity back.
#[derive(Debug, Clone)]
pub struct SaveRow {
    pub columns: Vec<String>,
    pub values: Vec<Value>,
    pub update_columns: Vec<String>,
    pub identity: Option<Value>,
}

/// The bookkeeping timestamps stored alongside every row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowDates {
    pub created: jiff::Timestamp,
    pub updated: jiff::Timestamp,
}

/// The storage primitives a [`crate::record::Record`] mapper needs,
/// implemented once per storage technology.
///
/// Everything the engine receives is already in column space: criteria
/// keys, sort columns, and save rows name storage columns, never record
/// fields. Implementations execute synchronously and issue only
/// parameterized statements; values never appear in SQL text.
pub trait Engine: Debug + Send + Sync + 'static {
    /// Fetches a sorted, paginated set of rows matching `criteria`.
    fn get_rows(
        &self,
        table: &str,
        sort_col: &str,
        sort_dir: SortDirection,
        offset: u64,
        max_results: u64,
        criteria: &Criteria,
    ) -> Result<Vec<Row>>;

    /// Counts the rows matching `criteria`.
    fn count_rows(&self, table: &str, criteria: &Criteria) -> Result<u64>;

    /// Fetches at most one row matching `criteria`.
    fn fetch_row(&self, table: &str, criteria: &Criteria) -> Result<Option<Row>>;

    /// Deletes the single row with the given identity.
    fn delete_by_id(&self, table: &str, id: &Value) -> Result<()>;

    /// Inserts or updates one row. Returns the storage-assigned identity
    /// when `save.identity` was `None`.
    fn do_save(&self, table: &str, save: SaveRow) -> Result<Option<Value>>;

    /// Inserts a batch of rows sharing one column set.
    fn do_insert_multiple(
        &self,
        table: &str,
        columns: &[String],
        rows: Vec<Vec<Value>>,
    ) -> Result<()>;

    /// Fetches the bookkeeping timestamps for the row with the given
    /// identity.
    fn dates_by_id(&self, table: &str, id: &Value) -> Result<Option<RowDates>>;
}
