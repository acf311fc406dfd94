mod builder;
pub use builder::SchemaBuilder;

mod field;
pub use field::{FieldConstraints, Visibility};

mod validator;
pub use validator::{Validation, Validator};

use crate::{error::ValidationErrors, record::RecordData, Value};

use indexmap::IndexMap;

/// Name of the identity field every schema must declare.
pub const ID: &str = "id";

/// The validation rules governing a record type's fields.
///
/// Constructed once per record type via [`Schema::builder`]; stateless and
/// read-only thereafter. A schema knows nothing about storage.
#[derive(Clone)]
pub struct Schema {
    pub(crate) fields: IndexMap<String, FieldConstraints>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldConstraints)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn field(&self, name: &str) -> Option<&FieldConstraints> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Validates `data` against every declared field, accumulating failures
    /// into `errors`. Returns `true` when this pass found no failures.
    ///
    /// Per field, in declaration order:
    /// 1. `not_empty` fires on loose-empty values, including entirely
    ///    absent ones, without stopping the remaining checks (a zero-like
    ///    value can still fail a later check, which then replaces the
    ///    message).
    /// 2. `required` fires on absent values and stops checks for the field.
    /// 3. Absent-but-optional fields skip the remaining checks.
    /// 4. Allowed-value membership, then validators, first failure wins.
    ///
    /// Newly found errors take precedence over same-keyed entries already
    /// in `errors`.
    pub fn validate(&self, data: &RecordData, errors: &mut ValidationErrors) -> bool {
        let mut found = ValidationErrors::new();

        for (name, constraints) in &self.fields {
            let value = data.get(name);

            if constraints.not_empty && value.map_or(true, Value::is_empty_like) {
                found.insert(name, "This field should not be empty");
                // No early exit: a zero-like value still runs the rest of
                // the checks for this field.
            }

            if constraints.required && value.is_none() {
                found.insert(name, "This field is required");
                continue;
            }

            let Some(value) = value else {
                continue;
            };

            if let Some(message) = self.check_field(constraints, value, data) {
                found.insert(name, message);
            }
        }

        let ok = found.is_empty();
        errors.absorb(found);
        ok
    }

    /// Runs a single declared field's value checks, without the
    /// presence/emptiness rules. Used by [`crate::Record::set`].
    pub(crate) fn check_field(
        &self,
        constraints: &FieldConstraints,
        value: &Value,
        data: &RecordData,
    ) -> Option<String> {
        if !constraints.allowed_values.is_empty()
            && !constraints.allowed_values.contains(value)
        {
            return Some(format!(
                "This field should have one of the following values: {{{}}}",
                constraints
                    .allowed_values
                    .iter()
                    .map(|v| match v {
                        Value::String(s) => s.clone(),
                        other => format!("{other:?}"),
                    })
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }

        for validator in &constraints.validators {
            match validator.check(value, data) {
                Validation::Valid => {}
                Validation::Invalid(message) => return Some(message),
                Validation::Unspecified => return Some("This field is invalid".to_string()),
            }
        }

        None
    }
}

impl core::fmt::Debug for Schema {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Schema")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}
