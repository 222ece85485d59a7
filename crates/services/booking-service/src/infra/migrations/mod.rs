//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}
//!
//! Child tables carry a `shop_id` column but no foreign key: records are
//! scoped by shop id the way documents live under a parent collection.

use sea_orm_migration::prelude::*;

mod m20240101_000001_create_shops_table;
mod m20240101_000002_create_operators_table;
mod m20240101_000003_create_services_table;
mod m20240101_000004_create_bookings_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_shops_table::Migration),
            Box::new(m20240101_000002_create_operators_table::Migration),
            Box::new(m20240101_000003_create_services_table::Migration),
            Box::new(m20240101_000004_create_bookings_table::Migration),
        ]
    }
}
