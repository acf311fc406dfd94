use super::{Formatter, Params, ToSql};

use carto_core::Result;

/// A backtick-quoted identifier. Embedded backticks are doubled, so
/// identifier text can never break out of the quoting.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        f.dst.push('`');
        for ch in self.0.as_ref().chars() {
            if ch == '`' {
                f.dst.push('`');
            }
            f.dst.push(ch);
        }
        f.dst.push('`');
        Ok(())
    }
}
