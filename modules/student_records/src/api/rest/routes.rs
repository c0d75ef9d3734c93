//! Route registration

use super::{dto::StudentDto, handlers};
use crate::domain::StudentService;
use axum::{
    extract::Path,
    http::StatusCode,
    response::Response,
    routing::get,
    Extension, Json, Router,
};
use crudkit::api::Problem;
use std::sync::Arc;

/// Register the student routes on `router`
pub fn register_routes(router: Router, service: Arc<StudentService>) -> Router {
    router
        .route(
            "/students",
            get(list_students_handler)
                .post(create_student_handler)
                .put(update_student_handler),
        )
        .route(
            "/students/{id}",
            get(get_student_handler).delete(delete_student_handler),
        )
        .layer(Extension(service))
}

// ===== Handler wrappers that extract service from Extension =====

async fn list_students_handler(
    Extension(service): Extension<Arc<StudentService>>,
) -> Result<Json<Vec<StudentDto>>, Problem> {
    handlers::list_students(service).await
}

async fn get_student_handler(
    Extension(service): Extension<Arc<StudentService>>,
    path: Path<i64>,
) -> Result<Response, Problem> {
    handlers::get_student(service, path).await
}

async fn create_student_handler(
    Extension(service): Extension<Arc<StudentService>>,
    body: Json<StudentDto>,
) -> Result<StatusCode, Problem> {
    handlers::create_student(service, body).await
}

async fn update_student_handler(
    Extension(service): Extension<Arc<StudentService>>,
    body: Json<StudentDto>,
) -> Result<StatusCode, Problem> {
    handlers::update_student(service, body).await
}

async fn delete_student_handler(
    Extension(service): Extension<Arc<StudentService>>,
    path: Path<i64>,
) -> Result<StatusCode, Problem> {
    handlers::delete_student(service, path).await
}
