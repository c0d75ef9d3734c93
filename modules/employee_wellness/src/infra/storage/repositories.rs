//! SQL repository implementations

use super::mapper::{EmployeeRowMapper, ProgramRowMapper};
use super::schema::PROGRAM;
use crate::contract::{Employee, Program};
use crate::domain::repository::{EmployeeRepository, ProgramRepository};
use async_trait::async_trait;
use crudkit::{SqlRepository, StoreError};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

// ===== Employee Repository =====

pub struct SqlEmployeeRepository {
    inner: SqlRepository<EmployeeRowMapper>,
}

impl SqlEmployeeRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            inner: SqlRepository::new(db),
        }
    }
}

#[async_trait]
impl EmployeeRepository for SqlEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, StoreError> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, StoreError> {
        self.inner.find_by_id(id).await
    }

    async fn save(&self, employee: &Employee) -> Result<Employee, StoreError> {
        self.inner.save(employee).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, StoreError> {
        self.inner.delete_cascade(id, &[&PROGRAM]).await
    }
}

// ===== Program Repository =====

pub struct SqlProgramRepository {
    inner: SqlRepository<ProgramRowMapper>,
}

impl SqlProgramRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            inner: SqlRepository::new(db),
        }
    }
}

#[async_trait]
impl ProgramRepository for SqlProgramRepository {
    async fn find_all(&self) -> Result<Vec<Program>, StoreError> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Program>, StoreError> {
        self.inner.find_by_id(id).await
    }

    async fn save(&self, program: &Program) -> Result<Program, StoreError> {
        self.inner.save(program).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, StoreError> {
        self.inner.delete_by_id(id).await
    }
}
