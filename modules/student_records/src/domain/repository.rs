//! Repository trait for student persistence
//!
//! Implementation is in infra/storage/repositories.rs

use crate::contract::Student;
use async_trait::async_trait;
use crudkit::StoreError;

#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Student>, StoreError>;

    /// `None` when no student has this id
    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, StoreError>;

    /// Plain insert; a taken id is a store error
    async fn insert(&self, student: &Student) -> Result<Student, StoreError>;

    /// Replace the name of an existing student, `None` when the id is unknown
    async fn update(&self, student: &Student) -> Result<Option<Student>, StoreError>;

    /// Number of rows removed
    async fn delete_by_id(&self, id: i64) -> Result<u64, StoreError>;
}
