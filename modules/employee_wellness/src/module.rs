//! Module wiring: storage, services, migrations and REST registration

use crate::api::rest::{routes, ApiDoc};
use crate::config::Config;
use crate::domain::{EmployeeService, ProgramService};
use crate::infra::storage::{
    migrations::Migrator,
    repositories::{SqlEmployeeRepository, SqlProgramRepository},
};
use anyhow::Result;
use axum::Router;
use crudkit::api::RestMounts;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;
use utoipa::OpenApi;

/// Employee wellness module
pub struct EmployeeWellnessModule {
    config: Config,
    employees: Arc<EmployeeService>,
    programs: Arc<ProgramService>,
}

impl EmployeeWellnessModule {
    pub fn new(config: Config, db: Arc<DatabaseConnection>) -> Self {
        // Build repositories
        let employee_repo = Arc::new(SqlEmployeeRepository::new(db.clone()));
        let program_repo = Arc::new(SqlProgramRepository::new(db));

        // Build domain services
        let employees = Arc::new(EmployeeService::new(employee_repo));
        let programs = Arc::new(ProgramService::new(program_repo));

        Self {
            config,
            employees,
            programs,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn employees(&self) -> Arc<EmployeeService> {
        self.employees.clone()
    }

    pub fn programs(&self) -> Arc<ProgramService> {
        self.programs.clone()
    }

    /// Apply pending migrations of this module
    pub async fn migrate(db: &DatabaseConnection) -> Result<()> {
        Migrator::up(db, None).await?;
        tracing::info!("employee wellness migrations applied");
        Ok(())
    }

    /// Register the employee and program routes under the configured base path
    pub fn register_rest(&self, mounts: &mut RestMounts) -> Result<()> {
        tracing::info!(base_path = %self.config.base_path, "registering employee wellness routes");
        let routes = routes::register_routes(
            Router::new(),
            self.employees.clone(),
            self.programs.clone(),
        );
        mounts.add(&self.config.base_path, routes)?;
        Ok(())
    }

    pub fn openapi() -> utoipa::openapi::OpenApi {
        ApiDoc::openapi()
    }
}
