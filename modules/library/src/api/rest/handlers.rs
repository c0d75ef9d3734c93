//! HTTP request handlers - thin layer that delegates to domain service

use super::dto::{BookDto, UserDto};
use crate::domain::LibraryService;
use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use crudkit::api::Problem;
use std::sync::Arc;

/// 200 with the body when present, 204 with no body otherwise
fn found_or_no_content<T: serde::Serialize>(value: Option<T>) -> Response {
    match value {
        Some(value) => Json(value).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

// ===== User Handlers =====

pub async fn get_user(service: Arc<LibraryService>, Path(id): Path<i64>) -> Result<Response, Problem> {
    let user = service.get_user(id).await?;
    Ok(found_or_no_content(user.map(UserDto::from)))
}

pub async fn create_user(
    service: Arc<LibraryService>,
    Json(req): Json<UserDto>,
) -> Result<Json<UserDto>, Problem> {
    let user = service.create_user(&req.into()).await?;
    tracing::info!(user_id = ?user.id, "library user created");
    Ok(Json(user.into()))
}

// ===== Book Handlers =====

pub async fn get_book(service: Arc<LibraryService>, Path(id): Path<i64>) -> Result<Response, Problem> {
    let book = service.get_book(id).await?;
    Ok(found_or_no_content(book.map(BookDto::from)))
}

pub async fn create_book(
    service: Arc<LibraryService>,
    Json(req): Json<BookDto>,
) -> Result<Json<BookDto>, Problem> {
    let book = service.create_book(&req.into()).await?;
    tracing::info!(book_id = ?book.id, "book created");
    Ok(Json(book.into()))
}
