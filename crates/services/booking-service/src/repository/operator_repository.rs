//! Operator repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde_json::Value;
use uuid::Uuid;

use super::entities::operator::{self, ActiveModel, Entity as OperatorEntity};
use common::{AppError, AppResult};
use domain::{NewOperator, Operator};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Operator repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait OperatorRepository: Send + Sync {
    /// List every operator of a shop
    async fn list(&self, shop_id: &str) -> AppResult<Vec<Operator>>;

    /// Store a new operator and return its generated id
    async fn create(&self, operator: NewOperator) -> AppResult<String>;
}

/// Concrete implementation of OperatorRepository
pub struct OperatorStore {
    db: DatabaseConnection,
}

impl OperatorStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OperatorRepository for OperatorStore {
    async fn list(&self, shop_id: &str) -> AppResult<Vec<Operator>> {
        let models = OperatorEntity::find()
            .filter(operator::Column::ShopId.eq(shop_id))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Operator::from).collect())
    }

    async fn create(&self, operator: NewOperator) -> AppResult<String> {
        let service_ids = operator.service_ids.into_iter().map(Value::String).collect();

        let active_model = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            shop_id: Set(operator.shop_id),
            name: Set(operator.name),
            service_ids: Set(Value::Array(service_ids)),
            working_hours: Set(Value::Object(operator.working_hours)),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(model.id)
    }
}
