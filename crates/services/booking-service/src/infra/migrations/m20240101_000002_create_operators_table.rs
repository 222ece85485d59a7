//! Migration: Create operators table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Operators::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Operators::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Operators::ShopId).string().not_null())
                    .col(ColumnDef::new(Operators::Name).string().not_null())
                    .col(ColumnDef::new(Operators::ServiceIds).json_binary().not_null())
                    .col(ColumnDef::new(Operators::WorkingHours).json_binary().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_operators_shop_id")
                    .table(Operators::Table)
                    .col(Operators::ShopId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Operators::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Operators {
    Table,
    Id,
    ShopId,
    Name,
    ServiceIds,
    WorkingHours,
}
