use super::{Comma, Flavor, Formatter, Ident, Params, ToSql, WhereClause};
use crate::stmt::{Count, Delete, Insert, Select, SelectDates, Statement, Upsert};

use carto_core::{
    engine::{CREATED_COLUMN, ID_COLUMN, UPDATED_COLUMN},
    Result,
};

impl ToSql for &Statement {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        match self {
            Statement::Count(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::SelectDates(stmt) => stmt.to_sql(f),
            Statement::Upsert(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &Select {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        fmt!(f, "SELECT * FROM ", Ident(&self.table), WhereClause(&self.criteria));

        if let Some((column, direction)) = &self.order_by {
            fmt!(f, " ORDER BY ", Ident(column));
            // SQLite's default BINARY collation is case sensitive; MySQL's
            // defaults are not. NOCASE only affects TEXT ordering.
            if let Flavor::Sqlite = f.serializer.flavor {
                fmt!(f, " COLLATE NOCASE");
            }
            fmt!(f, " ", direction.as_sql());
        }

        if let Some(limit) = &self.limit {
            fmt!(f, " LIMIT ", limit.offset, ", ", limit.max_results);
        }

        Ok(())
    }
}

impl ToSql for &Count {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        fmt!(f, "SELECT COUNT(*) AS num FROM ", Ident(&self.table), WhereClause(&self.criteria));
        Ok(())
    }
}

impl ToSql for &Delete {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        fmt!(f, "DELETE FROM ", Ident(&self.table), WhereClause(&self.criteria));
        Ok(())
    }
}

impl ToSql for &Insert {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        fmt!(
            f,
            "INSERT INTO ",
            Ident(&self.table),
            " (",
            Comma(self.columns.iter().map(Ident)),
            ") VALUES ",
        );

        let mut s = "";
        for row in &self.rows {
            if row.len() != self.columns.len() {
                return Err(carto_core::err!(
                    "insert row has {} values for {} columns",
                    row.len(),
                    self.columns.len()
                ));
            }

            fmt!(f, s, "(");
            let mut vs = "";
            for (column, value) in self.columns.iter().zip(row) {
                let placeholder = f.params.push(column, value);
                fmt!(f, vs, placeholder);
                vs = ", ";
            }
            fmt!(f, ")");
            s = ", ";
        }

        Ok(())
    }
}

impl ToSql for &Upsert {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        if self.values.len() != self.columns.len() {
            return Err(carto_core::err!(
                "upsert has {} values for {} columns",
                self.values.len(),
                self.columns.len()
            ));
        }

        fmt!(
            f,
            "INSERT INTO ",
            Ident(&self.table),
            " (",
            Comma(self.columns.iter().map(Ident)),
            ") VALUES (",
        );
        let mut s = "";
        for (column, value) in self.columns.iter().zip(&self.values) {
            let placeholder = f.params.push(column, value);
            fmt!(f, s, placeholder);
            s = ", ";
        }
        fmt!(f, ")");

        match f.serializer.flavor {
            Flavor::Mysql => {
                fmt!(f, " ON DUPLICATE KEY UPDATE ");
                let mut s = "";
                for column in &self.update_columns {
                    fmt!(f, s, Ident(column), " = VALUES(", Ident(column), ")");
                    s = ", ";
                }
            }
            Flavor::Sqlite => {
                fmt!(f, " ON CONFLICT(", Ident(&self.conflict_column), ") DO UPDATE SET ");
                let mut s = "";
                for column in &self.update_columns {
                    fmt!(f, s, Ident(column), " = excluded.", Ident(column));
                    s = ", ";
                }
            }
        }

        Ok(())
    }
}

impl ToSql for &SelectDates {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        fmt!(
            f,
            "SELECT ",
            Ident(CREATED_COLUMN),
            ", ",
            Ident(UPDATED_COLUMN),
            " FROM ",
            Ident(&self.table),
            " WHERE ",
            Ident(ID_COLUMN),
            " = ",
        );
        let placeholder = f.params.push(ID_COLUMN, &self.id);
        fmt!(f, placeholder, " LIMIT 1");
        Ok(())
    }
}
