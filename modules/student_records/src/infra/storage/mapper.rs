//! Row mapper for the `student` table

use super::schema::STUDENT;
use crate::contract::Student;
use crudkit::{MappingError, RecordMapper, Row, TableSchema};
use sea_orm::Value;

/// Reads and writes `student` rows column by column
pub struct StudentRowMapper;

impl RecordMapper for StudentRowMapper {
    type Record = Student;

    fn schema() -> &'static TableSchema {
        &STUDENT
    }

    fn id(record: &Student) -> Option<i64> {
        Some(record.id)
    }

    fn from_row(row: &Row) -> Result<Student, MappingError> {
        row.ensure_shape(&STUDENT)?;
        Ok(Student {
            id: row.get("id")?,
            name: row.get("name")?,
        })
    }

    fn to_params(record: &Student) -> Vec<Value> {
        vec![record.id.into(), record.name.clone().into()]
    }
}
