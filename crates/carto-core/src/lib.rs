mod error;
pub use error::{Error, ValidationErrors};

pub mod criteria;
pub use criteria::{Criteria, Criterion};

pub mod engine;
pub use engine::{Engine, SortDirection};

pub mod mapping;
pub use mapping::{ColumnMap, ColumnMapping};

pub mod record;
pub use record::{Record, RecordData};

pub mod schema;
pub use schema::Schema;

pub mod value;
pub use value::{Row, Value};

/// A Result type alias that uses Carto's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
