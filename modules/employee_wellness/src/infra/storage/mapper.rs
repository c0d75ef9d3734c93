//! Row mappers for the `employee` and `program` tables

use super::schema::{EMPLOYEE, PROGRAM};
use crate::contract::{Employee, Program};
use crudkit::{MappingError, RecordMapper, Row, TableSchema};
use sea_orm::Value;

pub struct EmployeeRowMapper;

impl RecordMapper for EmployeeRowMapper {
    type Record = Employee;

    fn schema() -> &'static TableSchema {
        &EMPLOYEE
    }

    fn id(record: &Employee) -> Option<i64> {
        record.id
    }

    fn from_row(row: &Row) -> Result<Employee, MappingError> {
        row.ensure_shape(&EMPLOYEE)?;
        Ok(Employee {
            id: Some(row.get("employee_id")?),
            full_name: row.get("full_name")?,
            date_of_birth: row.get("date_of_birth")?,
            email: row.get("email")?,
            health_status: row.get("health_status")?,
        })
    }

    fn to_params(record: &Employee) -> Vec<Value> {
        vec![
            record.id.into(),
            record.full_name.clone().into(),
            record.date_of_birth.into(),
            record.email.clone().into(),
            record.health_status.clone().into(),
        ]
    }
}

pub struct ProgramRowMapper;

impl RecordMapper for ProgramRowMapper {
    type Record = Program;

    fn schema() -> &'static TableSchema {
        &PROGRAM
    }

    fn id(record: &Program) -> Option<i64> {
        record.id
    }

    fn from_row(row: &Row) -> Result<Program, MappingError> {
        row.ensure_shape(&PROGRAM)?;
        Ok(Program {
            id: Some(row.get("program_id")?),
            name: row.get("program_name")?,
            description: row.get("program_description")?,
            start_date: row.get("start_date")?,
            end_date: row.get("end_date")?,
            employee_id: row.get("employee_id")?,
        })
    }

    fn to_params(record: &Program) -> Vec<Value> {
        vec![
            record.id.into(),
            record.name.clone().into(),
            record.description.clone().into(),
            record.start_date.into(),
            record.end_date.into(),
            record.employee_id.into(),
        ]
    }
}
