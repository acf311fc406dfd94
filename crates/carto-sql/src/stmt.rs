mod count;
pub use count::Count;

mod delete;
pub use delete::Delete;

mod insert;
pub use insert::Insert;

mod select;
pub use select::{Limit, Select};

mod select_dates;
pub use select_dates::SelectDates;

mod upsert;
pub use upsert::Upsert;

/// A statement the serializer can render to SQL text.
#[derive(Debug, Clone)]
pub enum Statement {
    Count(Count),
    Delete(Delete),
    Insert(Insert),
    Select(Select),
    SelectDates(SelectDates),
    Upsert(Upsert),
}
