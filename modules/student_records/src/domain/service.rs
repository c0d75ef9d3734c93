//! Domain service - delegates to the student repository

use super::repository::StudentRepository;
use crate::contract::Student;
use crudkit::StoreError;
use std::sync::Arc;

pub struct StudentService {
    repo: Arc<dyn StudentRepository>,
}

impl StudentService {
    pub fn new(repo: Arc<dyn StudentRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all_students(&self) -> Result<Vec<Student>, StoreError> {
        self.repo.find_all().await
    }

    pub async fn get_student(&self, id: i64) -> Result<Option<Student>, StoreError> {
        self.repo.find_by_id(id).await
    }

    pub async fn create_student(&self, student: &Student) -> Result<Student, StoreError> {
        self.repo.insert(student).await
    }

    pub async fn update_student(&self, student: &Student) -> Result<Option<Student>, StoreError> {
        self.repo.update(student).await
    }

    pub async fn delete_student(&self, id: i64) -> Result<u64, StoreError> {
        self.repo.delete_by_id(id).await
    }
}
