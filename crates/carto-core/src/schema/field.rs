use super::{Validation, Validator};
use crate::{record::RecordData, Value};

use std::sync::Arc;

/// Who may see a field in the public projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Private,
    Public,
}

/// Per-field validation constraints and projection flags.
///
/// Built by chaining; the empty constraint set accepts anything.
#[derive(Clone, Default)]
pub struct FieldConstraints {
    pub(crate) required: bool,
    pub(crate) not_empty: bool,
    pub(crate) allowed_values: Vec<Value>,
    pub(crate) validators: Vec<Validator>,
    pub(crate) visibility: Visibility,
    pub(crate) allow_direct_change: bool,
    pub(crate) format_public: Option<Arc<dyn Fn(&Value) -> Value + Send + Sync>>,
}

impl FieldConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    /// The field must be present.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// The field must not be loose-empty (see [`Value::is_empty_like`]).
    pub fn not_empty(mut self) -> Self {
        self.not_empty = true;
        self
    }

    /// The field's value must be one of the listed values.
    pub fn allowed_values<T: Into<Value>>(
        mut self,
        values: impl IntoIterator<Item = T>,
    ) -> Self {
        self.allowed_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a named or custom validator. Validators run in order; the
    /// first failure per field wins.
    pub fn validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    /// Adds a custom validation predicate. It receives the field's value
    /// and the whole record data.
    pub fn custom(
        self,
        f: impl Fn(&Value, &RecordData) -> Validation + Send + Sync + 'static,
    ) -> Self {
        self.validator(Validator::Custom(Arc::new(f)))
    }

    /// Includes the field in the public projection.
    pub fn public(mut self) -> Self {
        self.visibility = Visibility::Public;
        self
    }

    /// Allows the field to be overwritten by [`crate::Record::set_any_in`].
    pub fn allow_direct_change(mut self) -> Self {
        self.allow_direct_change = true;
        self
    }

    /// Formats the field's value in the public projection.
    pub fn format_public(
        mut self,
        f: impl Fn(&Value) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.format_public = Some(Arc::new(f));
        self
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

impl core::fmt::Debug for FieldConstraints {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("FieldConstraints")
            .field("required", &self.required)
            .field("not_empty", &self.not_empty)
            .field("allowed_values", &self.allowed_values)
            .field("validators", &self.validators.len())
            .field("visibility", &self.visibility)
            .finish()
    }
}
