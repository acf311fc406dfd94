mod value;

use carto_core::{
    engine::{Engine, RowDates, SaveRow, SortDirection, ID_COLUMN},
    err, Criteria, Error, Result, Row, Value,
};
use carto_sql::{ParamSet, Serializer, Statement};
use rusqlite::{types::Value as SqlValue, Connection as RusqliteConnection};
use url::Url;

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Creates a SQLite engine from a `sqlite:` connection URL.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver)?;

        if url.scheme() != "sqlite" {
            return Err(err!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            ));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// A fresh in-memory database, dropped when the connection closes.
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// A SQLite database at the given file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    pub fn connect(&self) -> Result<Connection> {
        match self {
            Self::File(path) => Connection::open(path),
            Self::InMemory => Connection::in_memory(),
        }
    }
}

/// A live SQLite connection implementing the storage [`Engine`].
///
/// rusqlite connections are not `Sync`, so the connection lives behind a
/// mutex and statements from concurrent callers run one at a time.
#[derive(Debug)]
pub struct Connection {
    connection: Mutex<RusqliteConnection>,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(sqlite_err)?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(sqlite_err)?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    /// Runs raw SQL with no bindings. Intended for table setup.
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        self.lock()?.execute_batch(sql).map_err(sqlite_err)
    }

    fn lock(&self) -> Result<MutexGuard<'_, RusqliteConnection>> {
        self.connection
            .lock()
            .map_err(|_| err!("sqlite connection mutex poisoned"))
    }

    fn execute(&self, stmt: &Statement) -> Result<()> {
        let (sql, bindings) = serialize(stmt)?;
        let conn = self.lock()?;
        let mut prepared = conn.prepare_cached(&sql).map_err(sqlite_err)?;
        prepared
            .execute(named_refs(&bindings).as_slice())
            .map_err(sqlite_err)?;
        Ok(())
    }

    fn query(&self, stmt: &Statement) -> Result<Vec<Row>> {
        let (sql, bindings) = serialize(stmt)?;
        let conn = self.lock()?;
        let mut prepared = conn.prepare_cached(&sql).map_err(sqlite_err)?;

        let columns: Vec<String> = prepared
            .column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();

        let mut rows = prepared
            .query(named_refs(&bindings).as_slice())
            .map_err(sqlite_err)?;

        let mut out = Vec::new();
        while let Some(row) = rows.next().map_err(sqlite_err)? {
            let mut record = Row::new();
            for (index, column) in columns.iter().enumerate() {
                let cell: SqlValue = row.get(index).map_err(sqlite_err)?;
                record.insert(column.clone(), value::from_sql(cell)?);
            }
            out.push(record);
        }

        Ok(out)
    }
}

impl Engine for Connection {
    fn get_rows(
        &self,
        table: &str,
        sort_col: &str,
        sort_dir: SortDirection,
        offset: u64,
        max_results: u64,
        criteria: &Criteria,
    ) -> Result<Vec<Row>> {
        let stmt = carto_sql::stmt::Select::new(table, criteria.clone())
            .order_by(sort_col, sort_dir)
            .limit(offset, max_results);
        self.query(&stmt.into())
    }

    fn count_rows(&self, table: &str, criteria: &Criteria) -> Result<u64> {
        let stmt = carto_sql::stmt::Count::new(table, criteria.clone());
        let rows = self.query(&stmt.into())?;

        let Some(row) = rows.first() else {
            return Ok(0);
        };
        match row.get("num") {
            Some(Value::I64(count)) => Ok(*count as u64),
            other => Err(err!("count query returned a non-integer; value={other:?}")),
        }
    }

    fn fetch_row(&self, table: &str, criteria: &Criteria) -> Result<Option<Row>> {
        let stmt = carto_sql::stmt::Select::new(table, criteria.clone()).limit(0, 1);
        let rows = self.query(&stmt.into())?;
        Ok(rows.into_iter().next())
    }

    fn delete_by_id(&self, table: &str, id: &Value) -> Result<()> {
        let criteria = Criteria::new().with(ID_COLUMN, id.clone());
        self.execute(&carto_sql::stmt::Delete::new(table, criteria).into())
    }

    fn do_save(&self, table: &str, save: SaveRow) -> Result<Option<Value>> {
        let fresh = save.identity.is_none();
        let stmt = carto_sql::stmt::Upsert {
            table: table.to_string(),
            columns: save.columns,
            values: save.values,
            conflict_column: ID_COLUMN.to_string(),
            update_columns: save.update_columns,
        };

        let (sql, bindings) = serialize(&stmt.into())?;
        let conn = self.lock()?;
        let mut prepared = conn.prepare_cached(&sql).map_err(sqlite_err)?;
        prepared
            .execute(named_refs(&bindings).as_slice())
            .map_err(sqlite_err)?;

        Ok(fresh.then(|| Value::I64(conn.last_insert_rowid())))
    }

    fn do_insert_multiple(
        &self,
        table: &str,
        columns: &[String],
        rows: Vec<Vec<Value>>,
    ) -> Result<()> {
        let stmt = carto_sql::stmt::Insert::new(table, columns.to_vec(), rows);
        self.execute(&stmt.into())
    }

    fn dates_by_id(&self, table: &str, id: &Value) -> Result<Option<RowDates>> {
        let stmt = carto_sql::stmt::SelectDates::new(table, id.clone());
        let rows = self.query(&stmt.into())?;

        let Some(row) = rows.first() else {
            return Ok(None);
        };
        Ok(Some(RowDates {
            created: parse_date_column(row, "created_utc")?,
            updated: parse_date_column(row, "updated_utc")?,
        }))
    }
}

fn parse_date_column(row: &Row, column: &str) -> Result<jiff::Timestamp> {
    match row.get(column) {
        Some(Value::String(text)) => value::parse_timestamp(text),
        other => Err(err!(
            "column `{column}` does not hold timestamp text; value={other:?}"
        )),
    }
}

fn serialize(stmt: &Statement) -> Result<(String, Vec<(String, value::SqlParam)>)> {
    let mut params = ParamSet::new();
    let sql = Serializer::sqlite().serialize(stmt, &mut params)?;

    let bindings = params
        .into_entries()
        .into_iter()
        .map(|(name, val)| (format!(":{name}"), value::SqlParam(val)))
        .collect();

    Ok((sql, bindings))
}

fn named_refs(bindings: &[(String, value::SqlParam)]) -> Vec<(&str, &dyn rusqlite::types::ToSql)> {
    bindings
        .iter()
        .map(|(name, param)| (name.as_str(), param as &dyn rusqlite::types::ToSql))
        .collect()
}

fn sqlite_err(err: rusqlite::Error) -> Error {
    match &err {
        rusqlite::Error::SqliteFailure(cause, _)
            if cause.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Error::constraint_violation(err)
        }
        _ => Error::driver(err),
    }
}
