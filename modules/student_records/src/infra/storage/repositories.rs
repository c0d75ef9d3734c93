//! SQL repository implementation

use super::mapper::StudentRowMapper;
use crate::contract::Student;
use crate::domain::repository::StudentRepository;
use async_trait::async_trait;
use crudkit::{SqlRepository, StoreError};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub struct SqlStudentRepository {
    inner: SqlRepository<StudentRowMapper>,
}

impl SqlStudentRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            inner: SqlRepository::new(db),
        }
    }
}

#[async_trait]
impl StudentRepository for SqlStudentRepository {
    async fn find_all(&self) -> Result<Vec<Student>, StoreError> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, StoreError> {
        self.inner.find_by_id(id).await
    }

    async fn insert(&self, student: &Student) -> Result<Student, StoreError> {
        self.inner.insert(student).await
    }

    async fn update(&self, student: &Student) -> Result<Option<Student>, StoreError> {
        self.inner.update(student).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, StoreError> {
        self.inner.delete_by_id(id).await
    }
}
