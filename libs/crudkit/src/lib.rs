//! CRUD toolkit
//!
//! Shared building blocks for the registry modules: explicit table schemas,
//! relational rows, record mappers, a generic SQL repository and the REST
//! error surface.

pub mod api;
pub mod error;
pub mod mapper;
pub mod repository;
pub mod row;
pub mod schema;

pub use error::StoreError;
pub use mapper::RecordMapper;
pub use repository::SqlRepository;
pub use row::{MappingError, Row};
pub use schema::{ColumnKind, ColumnSpec, ForeignKeySpec, IdStrategy, OnDelete, TableSchema};
