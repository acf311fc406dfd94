use crate::Value;

use indexmap::IndexMap;

/// A single field-level filter predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    /// The field's column equals the value.
    Equal(Value),

    /// The field's column is NULL.
    IsNull,

    /// The field's column is not NULL.
    IsNotNull,

    /// The field's column is less than the value.
    LessThan(Value),

    /// The field's column is greater than the value.
    GreaterThan(Value),

    /// The field's column is one of the listed values. The list must be
    /// non-empty; translation rejects an empty list.
    In(Vec<Value>),
}

impl<T: Into<Value>> From<T> for Criterion {
    fn from(value: T) -> Self {
        Self::Equal(value.into())
    }
}

/// An ordered map of field name to criterion. Criteria are combined with
/// AND; iteration order follows insertion order so generated SQL is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    entries: IndexMap<String, Criterion>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a criterion for `field`, replacing any existing one.
    pub fn with(mut self, field: impl Into<String>, criterion: impl Into<Criterion>) -> Self {
        self.entries.insert(field.into(), criterion.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Criterion)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<F: Into<String>, C: Into<Criterion>> FromIterator<(F, C)> for Criteria {
    fn from_iter<I: IntoIterator<Item = (F, C)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(f, c)| (f.into(), c.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Criteria {
    type Item = (&'a String, &'a Criterion);
    type IntoIter = indexmap::map::Iter<'a, String, Criterion>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
