use super::{FieldConstraints, Schema, ID};
use crate::{Error, Result};

use indexmap::IndexMap;

/// Builds a [`Schema`] field by field.
#[derive(Default)]
pub struct SchemaBuilder {
    fields: IndexMap<String, FieldConstraints>,
}

impl SchemaBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Declares a field with its constraints. Redeclaring a field replaces
    /// the earlier constraints.
    pub fn field(mut self, name: impl Into<String>, constraints: FieldConstraints) -> Self {
        self.fields.insert(name.into(), constraints);
        self
    }

    /// Finishes the schema.
    ///
    /// A schema with no fields, or without the `id` identity field, is a
    /// fatal configuration error rather than a validation failure.
    pub fn build(self) -> Result<Schema> {
        if self.fields.is_empty() {
            return Err(Error::invalid_schema("no field definitions have been supplied"));
        }
        if !self.fields.contains_key(ID) {
            return Err(Error::invalid_schema("no id field declared"));
        }

        Ok(Schema {
            fields: self.fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_schema_is_fatal() {
        let err = Schema::builder().build().unwrap_err();
        assert!(err.is_invalid_schema());
    }

    #[test]
    fn missing_id_field_is_fatal() {
        let err = Schema::builder()
            .field("size", FieldConstraints::new())
            .build()
            .unwrap_err();
        assert!(err.is_invalid_schema());
        assert_eq!(err.to_string(), "invalid schema: no id field declared");
    }
}
