//! Catalog service - the services a shop offers.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use common::AppResult;
use domain::{validation::require_param, NewService, Service};

use crate::repository::ServiceRepository;

/// Catalog service trait for dependency injection.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// List the services of a shop
    async fn list_services(&self, shop_id: Option<&str>) -> AppResult<Vec<Service>>;

    /// Validate and store a new service, returning its id
    async fn create_service(&self, payload: &Value) -> AppResult<String>;
}

/// Concrete implementation of CatalogService using repository.
pub struct CatalogManager {
    repo: Arc<dyn ServiceRepository>,
}

impl CatalogManager {
    /// Create new catalog service instance with repository
    pub fn new(repo: Arc<dyn ServiceRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl CatalogService for CatalogManager {
    async fn list_services(&self, shop_id: Option<&str>) -> AppResult<Vec<Service>> {
        let shop_id = require_param(shop_id, "shopId")?;

        self.repo.list(&shop_id).await.inspect_err(|e| {
            tracing::error!(operation = "list_services", shop_id = %shop_id, error = %e, "Service listing failed");
        })
    }

    async fn create_service(&self, payload: &Value) -> AppResult<String> {
        let service = NewService::from_json(payload)?;
        let shop_id = service.shop_id.clone();

        let service_id = self.repo.create(service).await.inspect_err(|e| {
            tracing::error!(operation = "create_service", shop_id = %shop_id, error = %e, "Service insert failed");
        })?;
        tracing::info!(shop_id = %shop_id, service_id = %service_id, "Service created");

        Ok(service_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::AppError;
    use serde_json::json;
    use tokio_test::{assert_err, assert_ok};

    use crate::repository::MockServiceRepository;

    fn manager_expecting_create() -> CatalogManager {
        let mut repo = MockServiceRepository::new();
        repo.expect_create().returning(|_| Ok("svc-1".to_string()));
        CatalogManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_create_service_boundaries_accepted() {
        let manager = manager_expecting_create();

        assert_ok!(
            manager
                .create_service(&json!({"shopId": "s1", "name": "Trim", "durationMinutes": 0.01, "price": 10}))
                .await
        );
        assert_ok!(
            manager
                .create_service(&json!({"shopId": "s1", "name": "Trim", "durationMinutes": 15, "price": 0}))
                .await
        );
    }

    #[tokio::test]
    async fn test_create_service_boundaries_rejected() {
        let manager = CatalogManager::new(Arc::new(MockServiceRepository::new()));

        let result = manager
            .create_service(&json!({"shopId": "s1", "name": "Trim", "durationMinutes": 0, "price": 10}))
            .await;
        assert!(matches!(result, Err(AppError::Validation(msg)) if msg.contains("durationMinutes")));

        let result = manager
            .create_service(&json!({"shopId": "s1", "name": "Trim", "durationMinutes": 15, "price": -0.01}))
            .await;
        assert!(matches!(result, Err(AppError::Validation(msg)) if msg.contains("price")));

        assert_err!(
            manager
                .create_service(&json!({"shopId": "s1", "name": "Trim", "durationMinutes": "15", "price": 1}))
                .await
        );
    }

    #[tokio::test]
    async fn test_list_services_is_scoped_to_shop() {
        let mut repo = MockServiceRepository::new();
        repo.expect_list().times(1).returning(|shop_id| {
            assert_eq!(shop_id, "s1");
            Ok(Vec::new())
        });

        let manager = CatalogManager::new(Arc::new(repo));
        assert!(manager.list_services(Some(" s1 ")).await.unwrap().is_empty());
    }
}
