#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod expr;
use expr::WhereClause;

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

mod params;
pub use params::{ParamSet, Params, Placeholder};

mod statement;

use crate::stmt::Statement;

use carto_core::Result;

/// Serialize a statement to a SQL string
///
/// The flavor handles the differences between SQL dialects (for now, the
/// upsert syntax). Values never appear in the generated text: every value
/// position becomes a named placeholder collected into `params`.
#[derive(Debug)]
pub struct Serializer {
    flavor: Flavor,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> Result<String> {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt)?;

        ret.push(';');
        Ok(ret)
    }
}
