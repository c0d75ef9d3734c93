//! Student Records Module
//!
//! Student registry with caller-assigned ids. Rows are read and written
//! through an explicit row mapper.

// Public exports
pub mod contract;
pub use contract::Student;

pub mod module;
pub use module::StudentRecordsModule;

pub mod config;
pub use config::Config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
