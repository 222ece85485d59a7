//! Service (catalog item) domain entity.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::INVALID_SERVICE_MESSAGE;
use crate::error::{DomainError, DomainResult};
use crate::validation::{require_non_negative, require_positive, require_string};

/// Something a shop sells, with a fixed length in minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub shop_id: String,
    #[cfg_attr(feature = "openapi", schema(example = "Haircut"))]
    pub name: String,
    /// Absent only when the stored record is damaged
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(example = 30.0))]
    pub duration_minutes: Option<f64>,
    #[cfg_attr(feature = "openapi", schema(example = 18.5))]
    pub price: f64,
}

impl Service {
    /// The stored duration, provided it is usable for scheduling.
    ///
    /// Durations are validated on creation, so a missing or non-positive value
    /// means the stored record is inconsistent.
    pub fn bookable_duration(&self) -> DomainResult<f64> {
        match self.duration_minutes {
            Some(minutes) if minutes.is_finite() && minutes > 0.0 => Ok(minutes),
            other => Err(DomainError::data_integrity(
                INVALID_SERVICE_MESSAGE,
                format!("service {} has invalid durationMinutes {:?}", self.id, other),
            )),
        }
    }
}

/// Validated input for creating a service.
#[derive(Debug, Clone, PartialEq)]
pub struct NewService {
    pub shop_id: String,
    pub name: String,
    pub duration_minutes: f64,
    pub price: f64,
}

impl NewService {
    /// Validate a `{shopId, name, durationMinutes, price}` request body.
    pub fn from_json(payload: &Value) -> DomainResult<Self> {
        Ok(Self {
            shop_id: require_string(payload.get("shopId"), "shopId")?,
            name: require_string(payload.get("name"), "name")?,
            duration_minutes: require_positive(payload.get("durationMinutes"), "durationMinutes")?,
            price: require_non_negative(payload.get("price"), "price")?,
        })
    }
}
