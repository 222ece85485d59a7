//! Booking database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Booking;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub shop_id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub service_id: String,
    pub operator_id: String,
    pub start_time: DateTimeUtc,
    pub end_time: DateTimeUtc,
    #[sea_orm(column_type = "Text")]
    pub notes: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Booking {
    fn from(model: Model) -> Self {
        Booking {
            id: model.id,
            shop_id: model.shop_id,
            customer_name: model.customer_name,
            customer_phone: model.customer_phone,
            service_id: model.service_id,
            operator_id: model.operator_id,
            start_time: model.start_time,
            end_time: model.end_time,
            notes: model.notes,
        }
    }
}
