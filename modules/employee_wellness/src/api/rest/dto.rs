//! REST DTOs with serde and OpenAPI annotations

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Employee as it travels over HTTP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    /// Ignored on create; the store assigns the id
    pub employee_id: Option<i64>,
    pub full_name: Option<String>,
    /// Calendar date, `YYYY-MM-DD`
    pub date_of_birth: Option<NaiveDate>,
    pub email: Option<String>,
    pub health_status: Option<String>,
}

/// Reference to the owning employee of a program.
///
/// Only the id is read; any other employee fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRefDto {
    pub employee_id: Option<i64>,
}

/// Wellness program as it travels over HTTP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgramDto {
    pub program_id: Option<i64>,
    pub program_name: Option<String>,
    pub program_description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// `null` for a program that belongs to nobody
    pub employee: Option<EmployeeRefDto>,
}
