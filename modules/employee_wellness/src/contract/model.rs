//! Contract models for employee wellness
//!
//! NO serde derives - these are pure domain models.

use chrono::NaiveDate;

/// Employee; the id is assigned by the store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Employee {
    pub id: Option<i64>,
    pub full_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub email: Option<String>,
    pub health_status: Option<String>,
}

/// Wellness program, optionally owned by an employee
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Owning employee; `None` detaches the program
    pub employee_id: Option<i64>,
}
