//! Module wiring: storage, service, migrations and REST registration

use crate::api::rest::{routes, ApiDoc};
use crate::config::Config;
use crate::domain::StudentService;
use crate::infra::storage::{migrations::Migrator, repositories::SqlStudentRepository};
use anyhow::Result;
use axum::Router;
use crudkit::api::RestMounts;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;
use utoipa::OpenApi;

/// Student records module
pub struct StudentRecordsModule {
    config: Config,
    service: Arc<StudentService>,
}

impl StudentRecordsModule {
    pub fn new(config: Config, db: Arc<DatabaseConnection>) -> Self {
        let repo = Arc::new(SqlStudentRepository::new(db));
        let service = Arc::new(StudentService::new(repo));
        Self { config, service }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn service(&self) -> Arc<StudentService> {
        self.service.clone()
    }

    /// Apply pending migrations of this module
    pub async fn migrate(db: &DatabaseConnection) -> Result<()> {
        Migrator::up(db, None).await?;
        tracing::info!("student records migrations applied");
        Ok(())
    }

    /// Register the student routes under the configured base path
    pub fn register_rest(&self, mounts: &mut RestMounts) -> Result<()> {
        tracing::info!(base_path = %self.config.base_path, "registering student records routes");
        let routes = routes::register_routes(Router::new(), self.service.clone());
        mounts.add(&self.config.base_path, routes)?;
        Ok(())
    }

    pub fn openapi() -> utoipa::openapi::OpenApi {
        ApiDoc::openapi()
    }
}
