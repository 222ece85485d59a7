//! Shop database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Shop;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "shops")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub owner_user_id: String,
    pub name: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Shop {
    fn from(model: Model) -> Self {
        Shop {
            id: model.id,
            owner_user_id: model.owner_user_id,
            name: model.name,
            created_at: model.created_at,
        }
    }
}
