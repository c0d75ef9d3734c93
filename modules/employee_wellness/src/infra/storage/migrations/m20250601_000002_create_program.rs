use crate::infra::storage::schema::PROGRAM;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(PROGRAM.create_table_statement())
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_program_employee_id")
                    .table(Alias::new(PROGRAM.table))
                    .col(Alias::new("employee_id"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new(PROGRAM.table)).to_owned())
            .await
    }
}
