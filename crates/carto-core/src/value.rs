use crate::Result;

use indexmap::IndexMap;

/// A storage row: an ordered map from column name to value, produced and
/// consumed only at the engine boundary.
pub type Row = IndexMap<String, Value>;

/// A dynamically typed field value.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// 64-bit float
    F64(f64),

    /// Signed 64-bit integer
    I64(i64),

    /// A list of values
    List(Vec<Value>),

    /// Null value
    #[default]
    Null,

    /// String value
    String(String),

    /// An instant in time
    Timestamp(jiff::Timestamp),
}

impl Value {
    /// Returns a `Value` representing null
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns `true` for values a criterion can compare against directly.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Self::Null | Self::List(_))
    }

    /// Loose emptiness, matching the classic `empty()` check the validation
    /// rules are specified against: null, empty string, empty list, numeric
    /// zero, `false`, and the string `"0"` all count as empty.
    pub fn is_empty_like(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(v) => !v,
            Self::I64(v) => *v == 0,
            Self::F64(v) => *v == 0.0,
            Self::String(v) => v.is_empty() || v == "0",
            Self::List(v) => v.is_empty(),
            Self::Timestamp(_) => false,
        }
    }

    pub fn to_i64(self) -> Result<i64> {
        match self {
            Self::I64(v) => Ok(v),
            _ => crate::bail!("cannot convert value to i64; value={self:#?}"),
        }
    }

    pub fn to_string(self) -> Result<String> {
        match self {
            Self::String(v) => Ok(v),
            _ => crate::bail!("cannot convert value to String; value={self:#?}"),
        }
    }

    pub fn to_timestamp(self) -> Result<jiff::Timestamp> {
        match self {
            Self::Timestamp(v) => Ok(v),
            _ => crate::bail!("cannot convert value to Timestamp; value={self:#?}"),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I64(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I64(src.into())
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<jiff::Timestamp> for Value {
    fn from(src: jiff::Timestamp) -> Self {
        Self::Timestamp(src)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(src: Vec<T>) -> Self {
        Self::List(src.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(src: Option<T>) -> Self {
        match src {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}
