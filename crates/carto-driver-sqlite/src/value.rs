use carto_core::{err, Result, Value};
use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};

/// Storage format for timestamp columns: UTC wall-clock text, second
/// precision, no zone suffix.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) fn format_timestamp(ts: &jiff::Timestamp) -> String {
    ts.strftime(TIMESTAMP_FORMAT).to_string()
}

pub(crate) fn parse_timestamp(text: &str) -> Result<jiff::Timestamp> {
    let dt = jiff::civil::DateTime::strptime(TIMESTAMP_FORMAT, text)?;
    Ok(dt.to_zoned(jiff::tz::TimeZone::UTC)?.timestamp())
}

/// Converts a SQLite column value to an engine value.
pub(crate) fn from_sql(value: SqlValue) -> Result<Value> {
    match value {
        SqlValue::Null => Ok(Value::Null),
        SqlValue::Integer(v) => Ok(Value::I64(v)),
        SqlValue::Real(v) => Ok(Value::F64(v)),
        SqlValue::Text(v) => Ok(Value::String(v)),
        SqlValue::Blob(_) => Err(err!("blob columns are not representable as values")),
    }
}

/// An engine value bound as a SQLite statement parameter.
#[derive(Debug)]
pub(crate) struct SqlParam(pub(crate) Value);

impl ToSql for SqlParam {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match &self.0 {
            Value::Null => ToSqlOutput::Owned(SqlValue::Null),
            Value::Bool(v) => ToSqlOutput::Owned(SqlValue::Integer(*v as i64)),
            Value::I64(v) => ToSqlOutput::Owned(SqlValue::Integer(*v)),
            Value::F64(v) => ToSqlOutput::Owned(SqlValue::Real(*v)),
            Value::String(v) => ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes())),
            Value::Timestamp(ts) => ToSqlOutput::Owned(SqlValue::Text(format_timestamp(ts))),
            Value::List(_) => {
                return Err(rusqlite::Error::ToSqlConversionFailure(
                    "cannot bind a list value as a single parameter".into(),
                ))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn timestamp_text_round_trips() {
        let ts = parse_timestamp("2024-05-17 09:30:02").unwrap();
        assert_eq!(format_timestamp(&ts), "2024-05-17 09:30:02");
    }

    #[test]
    fn timestamp_text_is_utc() {
        let ts = parse_timestamp("1970-01-01 00:00:01").unwrap();
        assert_eq!(ts.as_second(), 1);
    }

    #[test]
    fn malformed_timestamp_text_is_an_error() {
        assert!(parse_timestamp("17/05/2024").is_err());
    }

    #[test]
    fn sqlite_values_become_engine_values() {
        assert_eq!(from_sql(SqlValue::Null).unwrap(), Value::Null);
        assert_eq!(from_sql(SqlValue::Integer(7)).unwrap(), Value::I64(7));
        assert_eq!(
            from_sql(SqlValue::Text("large".to_string())).unwrap(),
            Value::String("large".to_string())
        );
        assert!(from_sql(SqlValue::Blob(vec![1, 2])).is_err());
    }
}
