//! Domain services - delegate to the repositories

use super::repository::{EmployeeRepository, ProgramRepository};
use crate::contract::{Employee, Program};
use crudkit::StoreError;
use std::sync::Arc;

pub struct EmployeeService {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }

    pub async fn register_employee(&self, employee: &Employee) -> Result<Employee, StoreError> {
        self.repo.save(employee).await
    }

    pub async fn get_all_employees(&self) -> Result<Vec<Employee>, StoreError> {
        self.repo.find_all().await
    }

    pub async fn get_employee(&self, id: i64) -> Result<Option<Employee>, StoreError> {
        self.repo.find_by_id(id).await
    }

    pub async fn delete_employee(&self, id: i64) -> Result<u64, StoreError> {
        self.repo.delete_by_id(id).await
    }
}

pub struct ProgramService {
    repo: Arc<dyn ProgramRepository>,
}

impl ProgramService {
    pub fn new(repo: Arc<dyn ProgramRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_program(&self, program: &Program) -> Result<Program, StoreError> {
        self.repo.save(program).await
    }

    pub async fn get_all_programs(&self) -> Result<Vec<Program>, StoreError> {
        self.repo.find_all().await
    }
}
