use super::{Formatter, Ident, Params, ToSql};

use carto_core::{Criteria, Criterion, Error, Result, Value};

/// Renders ` WHERE (frag) AND (frag) …`, or nothing at all when the
/// criteria map is empty.
pub(super) struct WhereClause<'a>(pub(super) &'a Criteria);

impl ToSql for WhereClause<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        let mut s = " WHERE (";
        for (column, criterion) in self.0.iter() {
            fmt!(f, s);
            criterion_to_sql(column, criterion, f)?;
            s = ") AND (";
        }

        if !self.0.is_empty() {
            fmt!(f, ")");
        }
        Ok(())
    }
}

fn criterion_to_sql<T: Params>(
    column: &str,
    criterion: &Criterion,
    f: &mut Formatter<'_, T>,
) -> Result<()> {
    match criterion {
        Criterion::Equal(value) => {
            let value = scalar(column, value, "equality")?;
            let placeholder = f.params.push(column, value);
            fmt!(f, Ident(column), " = ", placeholder);
        }
        Criterion::IsNull => {
            fmt!(f, Ident(column), " IS NULL");
        }
        Criterion::IsNotNull => {
            fmt!(f, Ident(column), " IS NOT NULL");
        }
        Criterion::LessThan(value) => {
            let value = scalar(column, value, "'less than'")?;
            let placeholder = f.params.push(column, value);
            fmt!(f, Ident(column), " < ", placeholder);
        }
        Criterion::GreaterThan(value) => {
            let value = scalar(column, value, "'greater than'")?;
            let placeholder = f.params.push(column, value);
            fmt!(f, Ident(column), " > ", placeholder);
        }
        Criterion::In(values) => {
            if values.is_empty() {
                return Err(Error::unknown_criterion(
                    column,
                    "'in' operator expects a non-empty list of values",
                ));
            }

            fmt!(f, Ident(column), " IN (");
            let mut s = "";
            for value in values {
                let value = scalar(column, value, "'in' list elements")?;
                let placeholder = f.params.push(column, value);
                fmt!(f, s, placeholder);
                s = ", ";
            }
            fmt!(f, ")");
        }
    }

    Ok(())
}

fn scalar<'a>(column: &str, value: &'a Value, operator: &str) -> Result<&'a Value> {
    if value.is_scalar() {
        Ok(value)
    } else {
        Err(Error::unknown_criterion(
            column,
            format!("{operator} requires a scalar value"),
        ))
    }
}
