//! Shared fixtures: in-memory store and request helpers
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use library::{Config, LibraryModule};
use crudkit::api::RestMounts;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Fresh migrated in-memory SQLite store
pub async fn memory_db() -> Arc<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();
    LibraryModule::migrate(&db).await.unwrap();
    Arc::new(db)
}

/// User and book routes mounted under the default base path
pub async fn app() -> Router {
    let module = LibraryModule::new(Config::default(), memory_db().await);
    let mut mounts = RestMounts::new();
    module.register_rest(&mut mounts).unwrap();
    mounts.into_router(Router::new())
}

/// Send one request; returns the status and the body when it parses as JSON
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Option<Value>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    // extractor rejections answer in plain text
    let json = serde_json::from_slice(&bytes).ok();
    (status, json)
}
