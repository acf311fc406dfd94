use super::{Formatter, ToSql};

use carto_core::{Result, Value};

/// Collects bound values while a statement is serialized.
///
/// `push` is handed the column name the value belongs to and returns the
/// placeholder to render in its place.
pub trait Params {
    fn push(&mut self, column: &str, value: &Value) -> Placeholder;
}

/// A named bind parameter, rendered as `:name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder(pub String);

/// The standard [`Params`] collector: named parameters in statement
/// order.
///
/// Placeholder names are derived from the column name, never taken from
/// it verbatim: the name is case-folded, non-alphabetic characters are
/// stripped, and digits are spelled out (`item_id2` becomes `itemidtwo`).
/// Reusing a column within one statement appends a spelled-out ordinal
/// (`itemidtwotwo`, `itemidtwothree`, …), so names are deterministic and
/// collision-free and user-controlled characters never reach SQL text.
#[derive(Debug, Default)]
pub struct ParamSet {
    entries: Vec<(String, Value)>,
}

impl ParamSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn into_entries(self) -> Vec<(String, Value)> {
        self.entries
    }

    fn next_name(&self, column: &str) -> String {
        let base = sanitize(column);
        let mut candidate = base.clone();
        let mut ordinal = 2usize;

        while self.entries.iter().any(|(name, _)| *name == candidate) {
            candidate = format!("{base}{}", spell_number(ordinal));
            ordinal += 1;
        }

        candidate
    }
}

impl Params for ParamSet {
    fn push(&mut self, column: &str, value: &Value) -> Placeholder {
        let name = self.next_name(column);
        self.entries.push((name.clone(), value.clone()));
        Placeholder(name)
    }
}

impl ToSql for Placeholder {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        f.dst.push(':');
        f.dst.push_str(&self.0);
        Ok(())
    }
}

const DIGIT_NAMES: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

fn sanitize(column: &str) -> String {
    let mut out = String::with_capacity(column.len());

    for ch in column.chars() {
        if ch.is_ascii_alphabetic() {
            out.push(ch.to_ascii_lowercase());
        } else if let Some(digit) = ch.to_digit(10) {
            out.push_str(DIGIT_NAMES[digit as usize]);
        }
        // Everything else is dropped.
    }

    if out.is_empty() {
        out.push('p');
    }
    out
}

fn spell_number(n: usize) -> String {
    n.to_string()
        .bytes()
        .map(|b| DIGIT_NAMES[(b - b'0') as usize])
        .collect()
}
