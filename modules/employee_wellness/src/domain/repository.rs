//! Repository traits for employee and program persistence
//!
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{Employee, Program};
use async_trait::async_trait;
use crudkit::StoreError;

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Employee>, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, StoreError>;

    /// Insert, or update when the id exists; returns the stored employee
    async fn save(&self, employee: &Employee) -> Result<Employee, StoreError>;

    /// Delete the employee and every program it owns.
    ///
    /// Returns the number of employee rows removed.
    async fn delete_by_id(&self, id: i64) -> Result<u64, StoreError>;
}

#[async_trait]
pub trait ProgramRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Program>, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Program>, StoreError>;

    async fn save(&self, program: &Program) -> Result<Program, StoreError>;

    async fn delete_by_id(&self, id: i64) -> Result<u64, StoreError>;
}
