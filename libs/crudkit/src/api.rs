//! REST surface shared by the modules: RFC-9457 problem details and base path
//! mounting

use crate::error::StoreError;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// RFC-9457 Problem Details for HTTP API errors
#[derive(Debug, Serialize)]
pub struct Problem {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: String,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// The HTTP status code
    pub status: u16,

    /// A human-readable explanation specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Problem {
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            .with_detail("An unexpected error occurred")
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (
            status,
            [(header::CONTENT_TYPE, "application/problem+json")],
            Json(self),
        )
            .into_response()
    }
}

/// Store failures are undifferentiated server errors on the wire
impl From<StoreError> for Problem {
    fn from(error: StoreError) -> Self {
        tracing::error!(error = %error, "store operation failed");
        Self::internal()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid base path '{0}': must be empty or start with '/'")]
pub struct InvalidBasePath(pub String);

/// Canonical form of a base path: no trailing `/`, empty for the root
pub fn normalize_base_path(base_path: &str) -> Result<String, InvalidBasePath> {
    let trimmed = base_path.trim_end_matches('/');
    if !trimmed.is_empty() && !trimmed.starts_with('/') {
        return Err(InvalidBasePath(base_path.to_owned()));
    }
    Ok(trimmed.to_owned())
}

/// Module routers grouped by base path.
///
/// Routers registered under the same base path are merged, so each prefix is
/// nested exactly once.
#[derive(Default)]
pub struct RestMounts {
    by_path: BTreeMap<String, Router>,
}

impl RestMounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `routes` under `base_path`; an empty path or `/` is the root
    pub fn add(&mut self, base_path: &str, routes: Router) -> Result<(), InvalidBasePath> {
        let key = normalize_base_path(base_path)?;
        let merged = match self.by_path.remove(&key) {
            Some(existing) => existing.merge(routes),
            None => routes,
        };
        self.by_path.insert(key, merged);
        Ok(())
    }

    /// Normalized base paths in use
    pub fn base_paths(&self) -> impl Iterator<Item = &str> {
        self.by_path.keys().map(String::as_str)
    }

    /// Attach every registered router to `router`
    pub fn into_router(self, router: Router) -> Router {
        self.by_path
            .into_iter()
            .fold(router, |router, (base_path, routes)| {
                if base_path.is_empty() {
                    router.merge(routes)
                } else {
                    router.nest(&base_path, routes)
                }
            })
    }
}
