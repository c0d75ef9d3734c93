//! HTTP request handlers - thin layer that delegates to domain services

use super::dto::{EmployeeDto, ProgramDto};
use crate::domain::{EmployeeService, ProgramService};
use axum::{extract::Path, Json};
use crudkit::api::Problem;
use std::sync::Arc;

// ===== Employee Handlers =====

pub async fn register_employee(
    service: Arc<EmployeeService>,
    Json(req): Json<EmployeeDto>,
) -> Result<Json<EmployeeDto>, Problem> {
    let employee = service.register_employee(&req.into()).await?;
    tracing::info!(employee_id = ?employee.id, "employee registered");
    Ok(Json(employee.into()))
}

pub async fn list_employees(
    service: Arc<EmployeeService>,
) -> Result<Json<Vec<EmployeeDto>>, Problem> {
    let employees = service.get_all_employees().await?;
    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

/// Delete an employee together with its programs.
///
/// Unknown ids answer 200 as well.
pub async fn delete_employee(
    service: Arc<EmployeeService>,
    Path(employee_id): Path<i64>,
) -> Result<(), Problem> {
    let removed = service.delete_employee(employee_id).await?;
    tracing::info!(employee_id, removed, "employee deleted");
    Ok(())
}

// ===== Program Handlers =====

pub async fn create_program(
    service: Arc<ProgramService>,
    Json(req): Json<ProgramDto>,
) -> Result<Json<ProgramDto>, Problem> {
    let program = service.create_program(&req.into()).await?;
    tracing::info!(program_id = ?program.id, employee_id = ?program.employee_id, "program created");
    Ok(Json(program.into()))
}

pub async fn list_programs(
    service: Arc<ProgramService>,
) -> Result<Json<Vec<ProgramDto>>, Problem> {
    let programs = service.get_all_programs().await?;
    Ok(Json(programs.into_iter().map(Into::into).collect()))
}
