use crate::infra::storage::schema::{BOOK, LIBRARY_USER};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(LIBRARY_USER.create_table_statement())
            .await?;
        manager.create_table(BOOK.create_table_statement()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new(BOOK.table)).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Alias::new(LIBRARY_USER.table)).to_owned())
            .await
    }
}
