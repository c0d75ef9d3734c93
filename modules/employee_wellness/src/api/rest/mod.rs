//! REST API layer

pub mod dto;
pub mod handlers;
pub mod mapper;
pub mod routes;

use dto::{EmployeeDto, EmployeeRefDto, ProgramDto};

/// OpenAPI components of the employee and program routes
#[derive(utoipa::OpenApi)]
#[openapi(components(schemas(EmployeeDto, EmployeeRefDto, ProgramDto)))]
pub struct ApiDoc;
