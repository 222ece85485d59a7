//! Migration: Create shops table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Shops::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Shops::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Shops::OwnerUserId).string().not_null())
                    .col(ColumnDef::new(Shops::Name).string().not_null())
                    .col(
                        ColumnDef::new(Shops::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookup by owner; deliberately not unique
        manager
            .create_index(
                Index::create()
                    .name("idx_shops_owner_user_id")
                    .table(Shops::Table)
                    .col(Shops::OwnerUserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Shops::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Shops {
    Table,
    Id,
    OwnerUserId,
    Name,
    CreatedAt,
}
