//! Record mapper contract

use crate::row::{MappingError, Row};
use crate::schema::TableSchema;
use sea_orm::Value;

/// Bidirectional transform between a relational row and a domain record.
///
/// Implementations read every declared column explicitly in `from_row` and
/// emit bind parameters in exactly the schema's column order in `to_params`.
/// No derived or computed fields.
pub trait RecordMapper: Send + Sync + 'static {
    type Record: Clone + Send + Sync + 'static;

    /// Table layout the mapper reads and writes
    fn schema() -> &'static TableSchema;

    /// Primary key of the record, `None` while unsaved
    fn id(record: &Self::Record) -> Option<i64>;

    /// Build a record from a row
    fn from_row(row: &Row) -> Result<Self::Record, MappingError>;

    /// Bind parameters for every declared column, in schema order
    fn to_params(record: &Self::Record) -> Vec<Value>;

    /// Record as a row, checked against the schema
    fn to_row(record: &Self::Record) -> Result<Row, MappingError> {
        Row::from_params(Self::schema(), Self::to_params(record))
    }
}
