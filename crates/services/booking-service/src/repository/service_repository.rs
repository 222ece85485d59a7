//! Service repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::entities::service::{self, ActiveModel, Entity as ServiceEntity};
use common::{AppError, AppResult};
use domain::{NewService, Service};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// List every service of a shop
    async fn list(&self, shop_id: &str) -> AppResult<Vec<Service>>;

    /// Find a service by id within a shop
    async fn find(&self, shop_id: &str, service_id: &str) -> AppResult<Option<Service>>;

    /// Store a new service and return its generated id
    async fn create(&self, service: NewService) -> AppResult<String>;
}

/// Concrete implementation of ServiceRepository
pub struct ServiceStore {
    db: DatabaseConnection,
}

impl ServiceStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ServiceRepository for ServiceStore {
    async fn list(&self, shop_id: &str) -> AppResult<Vec<Service>> {
        let models = ServiceEntity::find()
            .filter(service::Column::ShopId.eq(shop_id))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Service::from).collect())
    }

    async fn find(&self, shop_id: &str, service_id: &str) -> AppResult<Option<Service>> {
        // Scoped by shop: an id from another shop does not resolve
        let result = ServiceEntity::find_by_id(service_id.to_string())
            .filter(service::Column::ShopId.eq(shop_id))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Service::from))
    }

    async fn create(&self, service: NewService) -> AppResult<String> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            shop_id: Set(service.shop_id),
            name: Set(service.name),
            duration_minutes: Set(Some(service.duration_minutes)),
            price: Set(service.price),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(model.id)
    }
}
