//! Database connection, module assembly and the HTTP server

use crate::config::{AppConfig, DatabaseConfig, ModulesConfig, ServerConfig};
use crate::signals;
use anyhow::{Context, Result};
use axum::{http::StatusCode, routing::get, Json, Router};
use crudkit::api::RestMounts;
use employee_wellness::EmployeeWellnessModule;
use library::LibraryModule;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use student_records::StudentRecordsModule;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::openapi::{InfoBuilder, OpenApi, OpenApiBuilder};

/// Open the shared connection pool
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    let (max, min) = if config.is_in_memory() {
        (1, 1)
    } else {
        (config.max_connections, config.min_connections)
    };

    let mut options = ConnectOptions::new(config.dsn.clone());
    options
        .max_connections(max)
        .min_connections(min)
        .connect_timeout(config.connect_timeout)
        .sqlx_logging(config.log_statements);

    let db = Database::connect(options)
        .await
        .with_context(|| format!("failed to connect to database '{}'", config.dsn))?;
    tracing::info!(backend = ?db.get_database_backend(), max_connections = max, "database connected");
    Ok(db)
}

/// Migrate and mount every enabled module, plus `/healthz` and `/openapi.json`
pub async fn build_router(modules: &ModulesConfig, db: Arc<DatabaseConnection>) -> Result<Router> {
    let mut mounts = RestMounts::new();
    let mut openapi = OpenApiBuilder::new()
        .info(
            InfoBuilder::new()
                .title("crud-server")
                .version(env!("CARGO_PKG_VERSION"))
                .build(),
        )
        .build();

    if modules.employee_wellness.enabled {
        EmployeeWellnessModule::migrate(&db).await?;
        EmployeeWellnessModule::new(modules.employee_wellness.clone(), db.clone())
            .register_rest(&mut mounts)?;
        openapi.merge(EmployeeWellnessModule::openapi());
    } else {
        tracing::info!(module = "employee_wellness", "module disabled");
    }

    if modules.library.enabled {
        LibraryModule::migrate(&db).await?;
        LibraryModule::new(modules.library.clone(), db.clone()).register_rest(&mut mounts)?;
        openapi.merge(LibraryModule::openapi());
    } else {
        tracing::info!(module = "library", "module disabled");
    }

    if modules.student_records.enabled {
        StudentRecordsModule::migrate(&db).await?;
        StudentRecordsModule::new(modules.student_records.clone(), db.clone())
            .register_rest(&mut mounts)?;
        openapi.merge(StudentRecordsModule::openapi());
    } else {
        tracing::info!(module = "student_records", "module disabled");
    }

    let openapi = Arc::new(openapi);
    let router = Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route(
            "/openapi.json",
            get(move || {
                let doc = openapi.clone();
                async move { Json(OpenApi::clone(&doc)) }
            }),
        );

    Ok(mounts.into_router(router))
}

/// Request timeout, tracing and `x-request-id` around the whole router
pub fn with_http_layers(router: Router, config: &ServerConfig) -> Router {
    router
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Connect, assemble and serve until a shutdown signal arrives
pub async fn run(config: AppConfig) -> Result<()> {
    let db = Arc::new(connect(&config.database).await?);
    let router = with_http_layers(
        build_router(&config.modules, db.clone()).await?,
        &config.server,
    );

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;
    tracing::info!(addr = %listener.local_addr()?, "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(signals::shutdown_signal())
        .await?;

    if let Ok(db) = Arc::try_unwrap(db) {
        db.close().await?;
    }
    tracing::info!("server stopped");
    Ok(())
}
