//! Shop repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::entities::shop::{self, ActiveModel, Entity as ShopEntity};
use common::{AppError, AppResult};
use domain::{NewShop, Shop};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Shop repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ShopRepository: Send + Sync {
    /// Find the shop owned by a user, if any
    async fn find_by_owner(&self, owner_user_id: &str) -> AppResult<Option<Shop>>;

    /// Store a new shop and return its generated id.
    ///
    /// Does not check for an existing shop of the same owner.
    async fn create(&self, shop: NewShop) -> AppResult<String>;
}

/// Concrete implementation of ShopRepository
pub struct ShopStore {
    db: DatabaseConnection,
}

impl ShopStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ShopRepository for ShopStore {
    async fn find_by_owner(&self, owner_user_id: &str) -> AppResult<Option<Shop>> {
        let result = ShopEntity::find()
            .filter(shop::Column::OwnerUserId.eq(owner_user_id))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Shop::from))
    }

    async fn create(&self, shop: NewShop) -> AppResult<String> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            owner_user_id: Set(shop.owner_user_id),
            name: Set(shop.name),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(model.id)
    }
}
