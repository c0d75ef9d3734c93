//! Route registration

use super::{
    dto::{EmployeeDto, ProgramDto},
    handlers,
};
use crate::domain::{EmployeeService, ProgramService};
use axum::{
    extract::Path,
    routing::{delete, get},
    Extension, Json, Router,
};
use crudkit::api::Problem;
use std::sync::Arc;

/// Register the employee and program routes on `router`
pub fn register_routes(
    router: Router,
    employees: Arc<EmployeeService>,
    programs: Arc<ProgramService>,
) -> Router {
    router
        // Employee endpoints
        .route(
            "/employees",
            get(list_employees_handler).post(register_employee_handler),
        )
        .route("/employees/{employee_id}", delete(delete_employee_handler))
        // Program endpoints
        .route(
            "/programs",
            get(list_programs_handler).post(create_program_handler),
        )
        .layer(Extension(employees))
        .layer(Extension(programs))
}

// ===== Handler wrappers that extract services from Extension =====

async fn register_employee_handler(
    Extension(service): Extension<Arc<EmployeeService>>,
    body: Json<EmployeeDto>,
) -> Result<Json<EmployeeDto>, Problem> {
    handlers::register_employee(service, body).await
}

async fn list_employees_handler(
    Extension(service): Extension<Arc<EmployeeService>>,
) -> Result<Json<Vec<EmployeeDto>>, Problem> {
    handlers::list_employees(service).await
}

async fn delete_employee_handler(
    Extension(service): Extension<Arc<EmployeeService>>,
    path: Path<i64>,
) -> Result<(), Problem> {
    handlers::delete_employee(service, path).await
}

async fn create_program_handler(
    Extension(service): Extension<Arc<ProgramService>>,
    body: Json<ProgramDto>,
) -> Result<Json<ProgramDto>, Problem> {
    handlers::create_program(service, body).await
}

async fn list_programs_handler(
    Extension(service): Extension<Arc<ProgramService>>,
) -> Result<Json<Vec<ProgramDto>>, Problem> {
    handlers::list_programs(service).await
}
