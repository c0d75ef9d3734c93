//! Domain layer - repository seams and services

pub mod repository;
pub mod service;

pub use repository::{EmployeeRepository, ProgramRepository};
pub use service::{EmployeeService, ProgramService};
