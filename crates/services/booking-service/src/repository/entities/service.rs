//! Service database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Service;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub shop_id: String,
    pub name: String,
    pub duration_minutes: Option<f64>,
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Service {
    fn from(model: Model) -> Self {
        Service {
            id: model.id,
            shop_id: model.shop_id,
            name: model.name,
            duration_minutes: model.duration_minutes,
            price: model.price,
        }
    }
}
