//! Storage layer - schemas, row mappers, migrations and repositories

pub mod mapper;
pub mod migrations;
pub mod repositories;
pub mod schema;
