//! Slot listing.
//!
//! Availability is not computed: [`PlaceholderSlots`] stands in for a real
//! provider and answers every valid request with the same fixed intervals.

use async_trait::async_trait;
use serde_json::Value;

use common::AppResult;
use domain::{Slot, SlotQuery};

/// Source of bookable slots.
#[async_trait]
pub trait SlotProvider: Send + Sync {
    /// Slots for a `{date, serviceIds, operatorId?}` request
    async fn available_slots(&self, payload: &Value) -> AppResult<Vec<Slot>>;
}

/// Stand-in provider returning fixed placeholder slots.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderSlots;

#[async_trait]
impl SlotProvider for PlaceholderSlots {
    async fn available_slots(&self, payload: &Value) -> AppResult<Vec<Slot>> {
        let query = SlotQuery::from_json(payload)?;
        tracing::info!(
            date = %query.date,
            service_ids = ?query.service_ids,
            operator_id = ?query.operator_id,
            "Listing placeholder slots"
        );

        Ok(Slot::placeholders(&query.date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::AppError;
    use serde_json::json;

    #[tokio::test]
    async fn test_placeholder_ignores_operator() {
        let with_operator = PlaceholderSlots
            .available_slots(&json!({"date": "2024-03-15", "serviceIds": ["cut"], "operatorId": "op-1"}))
            .await
            .unwrap();
        let without = PlaceholderSlots
            .available_slots(&json!({"date": "2024-03-15", "serviceIds": []}))
            .await
            .unwrap();

        assert_eq!(with_operator, without);
        assert_eq!(with_operator.len(), 2);
    }

    #[tokio::test]
    async fn test_placeholder_requires_service_ids() {
        let result = PlaceholderSlots.available_slots(&json!({"date": "2024-03-15"})).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
