//! HTTP request handlers - thin layer that delegates to domain service

use super::dto::StudentDto;
use crate::domain::StudentService;
use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use crudkit::api::Problem;
use std::sync::Arc;

/// List every student
pub async fn list_students(service: Arc<StudentService>) -> Result<Json<Vec<StudentDto>>, Problem> {
    let students = service.get_all_students().await?;
    Ok(Json(students.into_iter().map(Into::into).collect()))
}

/// One student, or 204 with no body when the id is unknown
pub async fn get_student(
    service: Arc<StudentService>,
    Path(id): Path<i64>,
) -> Result<Response, Problem> {
    let response = match service.get_student(id).await? {
        Some(student) => Json(StudentDto::from(student)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    };
    Ok(response)
}

/// Insert a student under the id given in the body
pub async fn create_student(
    service: Arc<StudentService>,
    Json(req): Json<StudentDto>,
) -> Result<StatusCode, Problem> {
    let created = service.create_student(&req.into()).await?;
    tracing::info!(student_id = created.id, "student created");
    Ok(StatusCode::OK)
}

/// Update the student with the id given in the body.
///
/// An unknown id changes nothing and still answers 200.
pub async fn update_student(
    service: Arc<StudentService>,
    Json(req): Json<StudentDto>,
) -> Result<StatusCode, Problem> {
    let id = req.id;
    if service.update_student(&req.into()).await?.is_none() {
        tracing::debug!(student_id = id, "update matched no student");
    }
    Ok(StatusCode::OK)
}

/// 200 when a row was removed, 204 otherwise
pub async fn delete_student(
    service: Arc<StudentService>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Problem> {
    let removed = service.delete_student(id).await?;
    Ok(if removed > 0 {
        StatusCode::OK
    } else {
        StatusCode::NO_CONTENT
    })
}
