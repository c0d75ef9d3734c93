//! Domain layer - repository seams and service

pub mod repository;
pub mod service;

pub use repository::{BookRepository, UserRepository};
pub use service::LibraryService;
