use crate::{
    error::ValidationErrors,
    schema::{self, Schema},
    Error, Result, Value,
};

use indexmap::IndexMap;
use std::sync::Arc;

/// Record field data: an ordered map from field name to value.
pub type RecordData = IndexMap<String, Value>;

static NULL: Value = Value::Null;

/// A schema-validated domain entity.
///
/// Owns its field values; validated against its [`Schema`] at construction
/// and on every field mutation. Persistence is the mapper's concern, not
/// the record's.
#[derive(Debug, Clone)]
pub struct Record {
    schema: Arc<Schema>,
    data: RecordData,
}

impl Record {
    /// Creates a record from `data`, validating every field against
    /// `schema`. On failure the accumulated per-field errors are returned
    /// inside [`Error::validation`].
    pub fn create(schema: Arc<Schema>, data: RecordData) -> Result<Record> {
        let mut errors = ValidationErrors::new();
        if !schema.validate(&data, &mut errors) {
            return Err(Error::validation(errors));
        }

        Ok(Record { schema, data })
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    pub fn data(&self) -> &RecordData {
        &self.data
    }

    pub fn into_data(self) -> RecordData {
        self.data
    }

    pub fn is_valid_field(&self, field: &str) -> bool {
        self.schema.contains(field)
    }

    /// Returns the field's value, or `Null` when the field is declared but
    /// unset. Undeclared fields are an error.
    pub fn get(&self, field: &str) -> Result<&Value> {
        if !self.schema.contains(field) {
            return Err(Error::unknown_field(field));
        }
        Ok(self.data.get(field).unwrap_or(&NULL))
    }

    /// Sets a field, validating the new value against the field's
    /// constraints. Returns the record for chaining.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Result<&mut Self> {
        let field = field.into();
        let value = value.into();

        let Some(constraints) = self.schema.field(&field) else {
            return Err(Error::unknown_field(field));
        };

        if let Some(message) = self.schema.check_field(constraints, &value, &self.data) {
            let mut errors = ValidationErrors::new();
            errors.insert(field, message);
            return Err(Error::validation(errors));
        }

        self.data.insert(field, value);
        Ok(self)
    }

    /// Copies in any fields from `data` that are declared and flagged
    /// `allow_direct_change`; everything else is silently skipped.
    pub fn set_any_in(&mut self, data: RecordData) -> Result<&mut Self> {
        for (field, value) in data {
            let allowed = self
                .schema
                .field(&field)
                .is_some_and(|c| c.allow_direct_change);
            if allowed {
                self.set(field, value)?;
            }
        }
        Ok(self)
    }

    /// The identity field's value, `Null` when unset.
    pub fn identity(&self) -> &Value {
        self.data.get(schema::ID).unwrap_or(&NULL)
    }

    /// Returns `true` when the identity field holds a non-loose-empty
    /// value.
    pub fn has_identity(&self) -> bool {
        !self.identity().is_empty_like()
    }

    /// The public projection: only fields flagged public, with `Null` for
    /// declared-public fields that are unset, applying each field's public
    /// formatter when present.
    pub fn for_public(&self) -> RecordData {
        let mut output = RecordData::new();

        for (name, constraints) in self.schema.fields() {
            if !constraints.is_public() {
                continue;
            }

            let value = match self.data.get(name) {
                None => Value::Null,
                Some(value) => match &constraints.format_public {
                    Some(format) => format(value),
                    None => value.clone(),
                },
            };

            output.insert(name.to_string(), value);
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldConstraints, Validation};

    fn item_schema() -> Arc<Schema> {
        Arc::new(
            Schema::builder()
                .field(
                    "id",
                    FieldConstraints::new().custom(|v, _| match v {
                        Value::Null | Value::I64(_) => Validation::Valid,
                        _ => Validation::Unspecified,
                    }),
                )
                .field(
                    "size",
                    FieldConstraints::new()
                        .required()
                        .allowed_values(["small", "medium", "large"])
                        .public(),
                )
                .field("name", FieldConstraints::new().public())
                .field(
                    "secret",
                    FieldConstraints::new().allow_direct_change(),
                )
                .build()
                .unwrap(),
        )
    }

    fn data(entries: &[(&str, Value)]) -> RecordData {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn create_validates() {
        let err = Record::create(item_schema(), data(&[("size", "enormous".into())]))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(err.as_validation_errors().unwrap().contains("size"));
    }

    #[test]
    fn get_unknown_field() {
        let record =
            Record::create(item_schema(), data(&[("size", "small".into())])).unwrap();
        assert!(record.get("shoe_size").unwrap_err().is_unknown_field());
    }

    #[test]
    fn get_declared_but_unset() {
        let record =
            Record::create(item_schema(), data(&[("size", "small".into())])).unwrap();
        assert_eq!(*record.get("name").unwrap(), Value::Null);
    }

    #[test]
    fn set_validates_and_chains() {
        let mut record =
            Record::create(item_schema(), data(&[("size", "small".into())])).unwrap();

        record
            .set("name", "thing1")
            .unwrap()
            .set("size", "large")
            .unwrap();
        assert_eq!(record.get("size").unwrap().as_str(), Some("large"));

        let err = record.set("size", "enormous").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn set_any_in_respects_direct_change_flag() {
        let mut record =
            Record::create(item_schema(), data(&[("size", "small".into())])).unwrap();

        record
            .set_any_in(data(&[
                ("size", "large".into()),
                ("secret", "sauce".into()),
                ("unknown", "ignored".into()),
            ]))
            .unwrap();

        // Only `secret` carries allow_direct_change.
        assert_eq!(record.get("size").unwrap().as_str(), Some("small"));
        assert_eq!(record.get("secret").unwrap().as_str(), Some("sauce"));
    }

    #[test]
    fn public_projection() {
        let record =
            Record::create(item_schema(), data(&[("size", "small".into())])).unwrap();
        let public = record.for_public();

        assert_eq!(public.get("size"), Some(&Value::from("small")));
        // Declared public but unset: present as Null.
        assert_eq!(public.get("name"), Some(&Value::Null));
        assert_eq!(public.get("secret"), None);
        assert_eq!(public.len(), 2);
    }

    #[test]
    fn identity_helpers() {
        let mut record =
            Record::create(item_schema(), data(&[("size", "small".into())])).unwrap();
        assert!(!record.has_identity());

        record.set("id", 9).unwrap();
        assert!(record.has_identity());
        assert_eq!(record.identity().as_i64(), Some(9));
    }
}
