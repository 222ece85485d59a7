//! Shop service - registration and owner lookup.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use common::AppResult;
use domain::{validation::require_param, NewShop, Shop};

use crate::repository::ShopRepository;

/// Outcome of a shop registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopRegistration {
    pub shop_id: String,
    /// The owner already had a shop; nothing was created
    pub already_exists: bool,
}

/// Shop service trait for dependency injection.
#[async_trait]
pub trait ShopService: Send + Sync {
    /// Find the shop owned by `uid`
    async fn find_by_owner(&self, uid: Option<&str>) -> AppResult<Option<Shop>>;

    /// Create a shop for the owner unless one already exists.
    ///
    /// The existence check and the insert are two separate store calls, so
    /// concurrent registrations for the same owner can both create a shop.
    async fn register(&self, payload: &Value) -> AppResult<ShopRegistration>;
}

/// Concrete implementation of ShopService using repository.
pub struct ShopManager {
    repo: Arc<dyn ShopRepository>,
}

impl ShopManager {
    /// Create new shop service instance with repository
    pub fn new(repo: Arc<dyn ShopRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ShopService for ShopManager {
    async fn find_by_owner(&self, uid: Option<&str>) -> AppResult<Option<Shop>> {
        let uid = require_param(uid, "uid")?;

        self.repo.find_by_owner(&uid).await.inspect_err(|e| {
            tracing::error!(operation = "find_shop", owner_user_id = %uid, error = %e, "Shop lookup failed");
        })
    }

    async fn register(&self, payload: &Value) -> AppResult<ShopRegistration> {
        let shop = NewShop::from_json(payload)?;
        let owner = shop.owner_user_id.clone();

        let existing = self.repo.find_by_owner(&owner).await.inspect_err(|e| {
            tracing::error!(operation = "create_shop", owner_user_id = %owner, error = %e, "Shop lookup failed");
        })?;

        if let Some(existing) = existing {
            tracing::debug!(shop_id = %existing.id, owner_user_id = %owner, "Shop already registered");
            return Ok(ShopRegistration {
                shop_id: existing.id,
                already_exists: true,
            });
        }

        let shop_id = self.repo.create(shop).await.inspect_err(|e| {
            tracing::error!(operation = "create_shop", owner_user_id = %owner, error = %e, "Shop insert failed");
        })?;
        tracing::info!(shop_id = %shop_id, owner_user_id = %owner, "Shop created");

        Ok(ShopRegistration {
            shop_id,
            already_exists: false,
        })
    }
}
