//! Route registration

use super::{
    dto::{BookDto, UserDto},
    handlers,
};
use crate::domain::LibraryService;
use axum::{
    extract::Path,
    response::Response,
    routing::{get, post},
    Extension, Json, Router,
};
use crudkit::api::Problem;
use std::sync::Arc;

/// Register the user and book routes on `router`
pub fn register_routes(router: Router, service: Arc<LibraryService>) -> Router {
    router
        // User endpoints
        .route("/user", post(create_user_handler))
        .route("/user/{id}", get(get_user_handler))
        // Book endpoints
        .route("/book", post(create_book_handler))
        .route("/book/{id}", get(get_book_handler))
        .layer(Extension(service))
}

// ===== Handler wrappers that extract service from Extension =====

async fn get_user_handler(
    Extension(service): Extension<Arc<LibraryService>>,
    path: Path<i64>,
) -> Result<Response, Problem> {
    handlers::get_user(service, path).await
}

async fn create_user_handler(
    Extension(service): Extension<Arc<LibraryService>>,
    body: Json<UserDto>,
) -> Result<Json<UserDto>, Problem> {
    handlers::create_user(service, body).await
}

async fn get_book_handler(
    Extension(service): Extension<Arc<LibraryService>>,
    path: Path<i64>,
) -> Result<Response, Problem> {
    handlers::get_book(service, path).await
}

async fn create_book_handler(
    Extension(service): Extension<Arc<LibraryService>>,
    body: Json<BookDto>,
) -> Result<Json<BookDto>, Problem> {
    handlers::create_book(service, body).await
}
