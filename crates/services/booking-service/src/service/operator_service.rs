//! Operator service - staff listing and creation.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use common::AppResult;
use domain::{validation::require_param, NewOperator, Operator};

use crate::repository::OperatorRepository;

/// Operator service trait for dependency injection.
#[async_trait]
pub trait OperatorService: Send + Sync {
    /// List the operators of a shop
    async fn list_operators(&self, shop_id: Option<&str>) -> AppResult<Vec<Operator>>;

    /// Validate and store a new operator, returning its id
    async fn create_operator(&self, payload: &Value) -> AppResult<String>;
}

/// Concrete implementation of OperatorService using repository.
pub struct OperatorManager {
    repo: Arc<dyn OperatorRepository>,
}

impl OperatorManager {
    /// Create new operator service instance with repository
    pub fn new(repo: Arc<dyn OperatorRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl OperatorService for OperatorManager {
    async fn list_operators(&self, shop_id: Option<&str>) -> AppResult<Vec<Operator>> {
        let shop_id = require_param(shop_id, "shopId")?;

        self.repo.list(&shop_id).await.inspect_err(|e| {
            tracing::error!(operation = "list_operators", shop_id = %shop_id, error = %e, "Operator listing failed");
        })
    }

    async fn create_operator(&self, payload: &Value) -> AppResult<String> {
        let operator = NewOperator::from_json(payload)?;
        let shop_id = operator.shop_id.clone();

        let operator_id = self.repo.create(operator).await.inspect_err(|e| {
            tracing::error!(operation = "create_operator", shop_id = %shop_id, error = %e, "Operator insert failed");
        })?;
        tracing::info!(shop_id = %shop_id, operator_id = %operator_id, "Operator created");

        Ok(operator_id)
    }
}
