//! Database migrations for employee wellness

use sea_orm_migration::prelude::*;

mod m20250601_000001_create_employee;
mod m20250601_000002_create_program;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migration_table_name() -> DynIden {
        Alias::new("seaql_migrations_employee_wellness").into_iden()
    }

    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_employee::Migration),
            Box::new(m20250601_000002_create_program::Migration),
        ]
    }
}
