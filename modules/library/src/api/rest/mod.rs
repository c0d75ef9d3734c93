//! REST API layer

pub mod dto;
pub mod handlers;
pub mod mapper;
pub mod routes;

use dto::{BookDto, UserDto};

/// OpenAPI components of the user and book routes
#[derive(utoipa::OpenApi)]
#[openapi(components(schemas(UserDto, BookDto)))]
pub struct ApiDoc;
