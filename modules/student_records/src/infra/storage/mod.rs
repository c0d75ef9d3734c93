//! Storage layer - schema, row mapper, migrations and repository

pub mod mapper;
pub mod migrations;
pub mod repositories;
pub mod schema;
