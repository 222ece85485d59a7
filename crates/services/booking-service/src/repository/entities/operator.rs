//! Operator database entity for SeaORM.

use sea_orm::entity::prelude::*;
use serde_json::{Map, Value};

use domain::Operator;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "operators")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub shop_id: String,
    pub name: String,
    /// JSON array of service ids
    #[sea_orm(column_type = "JsonBinary")]
    pub service_ids: Json,
    /// JSON object, stored as received
    #[sea_orm(column_type = "JsonBinary")]
    pub working_hours: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Operator {
    fn from(model: Model) -> Self {
        let service_ids = match model.service_ids {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(id) => Some(id),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        };

        let working_hours = match model.working_hours {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        Operator {
            id: model.id,
            shop_id: model.shop_id,
            name: model.name,
            service_ids,
            working_hours,
        }
    }
}
