//! Library Module
//!
//! Registry of library users and books.

// Public exports
pub mod contract;
pub use contract::{Book, User};

pub mod module;
pub use module::LibraryModule;

pub mod config;
pub use config::Config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
