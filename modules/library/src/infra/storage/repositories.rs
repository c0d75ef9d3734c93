//! SQL repository implementations

use super::mapper::{BookRowMapper, UserRowMapper};
use crate::contract::{Book, User};
use crate::domain::repository::{BookRepository, UserRepository};
use async_trait::async_trait;
use crudkit::{SqlRepository, StoreError};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

// ===== User Repository =====

pub struct SqlUserRepository {
    inner: SqlRepository<UserRowMapper>,
}

impl SqlUserRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            inner: SqlRepository::new(db),
        }
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        self.inner.find_by_id(id).await
    }

    async fn save(&self, user: &User) -> Result<User, StoreError> {
        self.inner.save(user).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, StoreError> {
        self.inner.delete_by_id(id).await
    }
}

// ===== Book Repository =====

pub struct SqlBookRepository {
    inner: SqlRepository<BookRowMapper>,
}

impl SqlBookRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            inner: SqlRepository::new(db),
        }
    }
}

#[async_trait]
impl BookRepository for SqlBookRepository {
    async fn find_all(&self) -> Result<Vec<Book>, StoreError> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, StoreError> {
        self.inner.find_by_id(id).await
    }

    async fn save(&self, book: &Book) -> Result<Book, StoreError> {
        self.inner.save(book).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, StoreError> {
        self.inner.delete_by_id(id).await
    }
}
