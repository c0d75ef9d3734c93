//! REST API layer

pub mod dto;
pub mod handlers;
pub mod mapper;
pub mod routes;

use dto::StudentDto;

/// OpenAPI components of the student routes
#[derive(utoipa::OpenApi)]
#[openapi(components(schemas(StudentDto)))]
pub struct ApiDoc;
