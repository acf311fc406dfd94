mod mapper;
pub use mapper::{DataMapper, MapperConfig};

pub use carto_core::{
    criteria::{Criteria, Criterion},
    engine::{Engine, RowDates, SaveRow, SortDirection},
    mapping::{ColumnMap, ColumnMapping},
    record::{Record, RecordData},
    schema::{FieldConstraints, Schema, Validation, Validator, Visibility},
    Error, Result, Row, Value, ValidationErrors,
};

#[cfg(feature = "sqlite")]
pub use carto_driver_sqlite as sqlite;
