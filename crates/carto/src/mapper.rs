use carto_core::{
    engine::{Engine, SaveRow, SortDirection, CREATED_COLUMN, UPDATED_COLUMN},
    mapping::{ColumnMap, ColumnMapping},
    schema::{self, Schema},
    Criteria, Error, Record, Result, Row, Value,
};

use std::sync::Arc;

/// Static configuration for one mapper: where records of one type are
/// stored and how their fields correspond to columns.
#[derive(Debug, Clone)]
pub struct MapperConfig {
    pub table: String,
    pub schema: Arc<Schema>,
    pub mapping: ColumnMapping,
}

/// The storage-engine-agnostic mapper for one record type.
///
/// Describes *what* record(s) are wanted by field-level criteria and how
/// they sort and paginate; the [`Engine`] supplies *how* rows are fetched
/// and written. The mapper holds no mutable state of its own, so one
/// instance can serve any number of callers; concurrent writers are
/// serialized by the storage engine, not here.
#[derive(Debug)]
pub struct DataMapper {
    engine: Arc<dyn Engine>,
    config: MapperConfig,
}

impl DataMapper {
    pub fn new(engine: Arc<dyn Engine>, config: MapperConfig) -> Self {
        Self { engine, config }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Finds the record with the given identity.
    pub fn find_by_id(&self, id: impl Into<Value>) -> Result<Option<Record>> {
        self.find_single_from_criteria(Criteria::new().with(schema::ID, id.into()))
    }

    /// Finds at most one record matching `criteria` (in field space).
    pub fn find_single_from_criteria(&self, criteria: Criteria) -> Result<Option<Record>> {
        let criteria = self.map_criteria(&criteria)?;

        match self.engine.fetch_row(&self.config.table, &criteria)? {
            Some(row) => Ok(Some(self.create_from_row(&row)?)),
            None => Ok(None),
        }
    }

    /// Returns one page of records matching `criteria`, ordered by
    /// `sort_field`.
    ///
    /// The sort direction is parsed case-insensitively; offset and
    /// maximum results must be non-negative; the sort field must map
    /// directly to a storage column. All four are validated before the
    /// engine is touched.
    pub fn generate_page(
        &self,
        sort_field: &str,
        sort_dir: &str,
        offset: i64,
        max_results: i64,
        criteria: Criteria,
    ) -> Result<Vec<Record>> {
        let sort_dir = SortDirection::parse(sort_dir)?;
        if offset < 0 {
            return Err(Error::invalid_offset(offset));
        }
        if max_results < 0 {
            return Err(Error::invalid_max_results(max_results));
        }
        let Some(sort_col) = self.config.mapping.direct_column(sort_field) else {
            return Err(Error::unsortable_field(sort_field));
        };

        let criteria = self.map_criteria(&criteria)?;
        let rows = self.engine.get_rows(
            &self.config.table,
            sort_col,
            sort_dir,
            offset as u64,
            max_results as u64,
            &criteria,
        )?;

        rows.iter().map(|row| self.create_from_row(row)).collect()
    }

    /// Counts the records matching `criteria`.
    pub fn count(&self, criteria: Criteria) -> Result<u64> {
        let criteria = self.map_criteria(&criteria)?;
        self.engine.count_rows(&self.config.table, &criteria)
    }

    /// Inserts or updates one record.
    ///
    /// A record without an identity is inserted and handed the
    /// storage-assigned identity; a record with one is updated in place.
    /// The update timestamp is stamped on both paths; the creation
    /// timestamp is written on insert and never reassigned afterwards.
    pub fn save(&self, mut record: Record) -> Result<Record> {
        let row = self.config.mapping.to_storage(&record)?;
        let mut columns: Vec<String> = row.keys().cloned().collect();
        let mut values: Vec<Value> = row.values().cloned().collect();

        // Everything mapped gets reassigned on conflict; the creation
        // timestamp does not.
        let mut update_columns = columns.clone();
        update_columns.push(UPDATED_COLUMN.to_string());

        let now = jiff::Timestamp::now();
        columns.push(CREATED_COLUMN.to_string());
        values.push(now.into());
        columns.push(UPDATED_COLUMN.to_string());
        values.push(now.into());

        let identity = record.has_identity().then(|| record.identity().clone());

        let assigned = self.engine.do_save(
            &self.config.table,
            SaveRow {
                columns,
                values,
                update_columns,
                identity,
            },
        )?;

        if let Some(assigned) = assigned {
            record.set(schema::ID, assigned)?;
        }

        Ok(record)
    }

    /// Batch-inserts `records`. Every record is treated as new, even when
    /// it carries an identity value. The column set is taken from the
    /// first record and assumed uniform across the batch; creation and
    /// update timestamps are stamped on every row.
    pub fn insert_many(&self, records: &[Record]) -> Result<()> {
        let Some(first) = records.first() else {
            return Ok(());
        };

        let mut columns: Vec<String> = self
            .config
            .mapping
            .to_storage(first)?
            .keys()
            .cloned()
            .collect();
        let mapped = columns.len();
        columns.push(UPDATED_COLUMN.to_string());
        columns.push(CREATED_COLUMN.to_string());

        let now = jiff::Timestamp::now();
        let mut rows = Vec::with_capacity(records.len());
        for record in records {
            let row = self.config.mapping.to_storage(record)?;

            let mut values: Vec<Value> = Vec::with_capacity(columns.len());
            for column in &columns[..mapped] {
                values.push(row.get(column).cloned().unwrap_or(Value::Null));
            }
            values.push(now.into());
            values.push(now.into());
            rows.push(values);
        }

        self.engine
            .do_insert_multiple(&self.config.table, &columns, rows)
    }

    /// Deletes the single row backing `record`.
    pub fn delete(&self, record: &Record) -> Result<()> {
        if !record.has_identity() {
            return Err(Error::missing_identity("delete"));
        }
        self.engine
            .delete_by_id(&self.config.table, record.identity())
    }

    /// The creation timestamp of the row backing `record`. Returns `None`
    /// for records with no identity and for identities with no row.
    pub fn date_created(&self, record: &Record) -> Result<Option<jiff::Timestamp>> {
        if !record.has_identity() {
            return Ok(None);
        }
        Ok(self
            .engine
            .dates_by_id(&self.config.table, record.identity())?
            .map(|dates| dates.created))
    }

    /// The last-update timestamp of the row backing `record`, with the
    /// same `None` cases as [`Self::date_created`].
    pub fn date_updated(&self, record: &Record) -> Result<Option<jiff::Timestamp>> {
        if !record.has_identity() {
            return Ok(None);
        }
        Ok(self
            .engine
            .dates_by_id(&self.config.table, record.identity())?
            .map(|dates| dates.updated))
    }

    /// Translates field-space criteria into column space. Only
    /// direct-mapped fields may be filter keys.
    fn map_criteria(&self, criteria: &Criteria) -> Result<Criteria> {
        let mut mapped = Criteria::new();

        for (field, criterion) in criteria.iter() {
            match self.config.mapping.get(field) {
                None => return Err(Error::unknown_field(field)),
                Some(ColumnMap::Transform { .. }) => {
                    return Err(Error::unmappable_criteria(field))
                }
                Some(ColumnMap::Direct(column)) => {
                    mapped = mapped.with(column.clone(), criterion.clone());
                }
            }
        }

        Ok(mapped)
    }

    fn create_from_row(&self, row: &Row) -> Result<Record> {
        let data = self.config.mapping.from_storage(row)?;
        Record::create(self.config.schema.clone(), data)
    }
}
