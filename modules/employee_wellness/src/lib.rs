//! Employee Wellness Module
//!
//! Registry of employees and the wellness programs they take part in.
//! Deleting an employee removes the programs it owns.

// Public exports
pub mod contract;
pub use contract::{Employee, Program};

pub mod module;
pub use module::EmployeeWellnessModule;

pub mod config;
pub use config::Config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
