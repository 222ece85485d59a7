//! Migration: Create services table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Services::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Services::ShopId).string().not_null())
                    .col(ColumnDef::new(Services::Name).string().not_null())
                    // Nullable: a damaged record must still load so bookings can reject it
                    .col(ColumnDef::new(Services::DurationMinutes).double().null())
                    .col(ColumnDef::new(Services::Price).double().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_services_shop_id")
                    .table(Services::Table)
                    .col(Services::ShopId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Services::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Services {
    Table,
    Id,
    ShopId,
    Name,
    DurationMinutes,
    Price,
}
