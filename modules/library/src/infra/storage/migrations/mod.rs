//! Database migrations for the library

use sea_orm_migration::prelude::*;

mod m20250601_000001_create_user_and_book;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migration_table_name() -> DynIden {
        Alias::new("seaql_migrations_library").into_iden()
    }

    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250601_000001_create_user_and_book::Migration)]
    }
}
