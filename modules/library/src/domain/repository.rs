//! Repository traits for user and book persistence
//!
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{Book, User};
use async_trait::async_trait;
use crudkit::StoreError;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<User>, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError>;

    async fn save(&self, user: &User) -> Result<User, StoreError>;

    async fn delete_by_id(&self, id: i64) -> Result<u64, StoreError>;
}

#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Book>, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, StoreError>;

    async fn save(&self, book: &Book) -> Result<Book, StoreError>;

    async fn delete_by_id(&self, id: i64) -> Result<u64, StoreError>;
}
