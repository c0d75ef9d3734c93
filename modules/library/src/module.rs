//! Module wiring: storage, service, migrations and REST registration

use crate::api::rest::{routes, ApiDoc};
use crate::config::Config;
use crate::domain::LibraryService;
use crate::infra::storage::{
    migrations::Migrator,
    repositories::{SqlBookRepository, SqlUserRepository},
};
use anyhow::Result;
use axum::Router;
use crudkit::api::RestMounts;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;
use utoipa::OpenApi;

/// Library module
pub struct LibraryModule {
    config: Config,
    service: Arc<LibraryService>,
}

impl LibraryModule {
    pub fn new(config: Config, db: Arc<DatabaseConnection>) -> Self {
        let users = Arc::new(SqlUserRepository::new(db.clone()));
        let books = Arc::new(SqlBookRepository::new(db));
        let service = Arc::new(LibraryService::new(users, books));
        Self { config, service }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn service(&self) -> Arc<LibraryService> {
        self.service.clone()
    }

    /// Apply pending migrations of this module
    pub async fn migrate(db: &DatabaseConnection) -> Result<()> {
        Migrator::up(db, None).await?;
        tracing::info!("library migrations applied");
        Ok(())
    }

    /// Register the user and book routes under the configured base path
    pub fn register_rest(&self, mounts: &mut RestMounts) -> Result<()> {
        tracing::info!(base_path = %self.config.base_path, "registering library routes");
        let routes = routes::register_routes(Router::new(), self.service.clone());
        mounts.add(&self.config.base_path, routes)?;
        Ok(())
    }

    pub fn openapi() -> utoipa::openapi::OpenApi {
        ApiDoc::openapi()
    }
}
