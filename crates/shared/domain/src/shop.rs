//! Shop domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DomainResult;
use crate::validation::require_string;

/// A shop, owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    #[cfg_attr(feature = "openapi", schema(example = "6f1c2b8e-2f4a-4a59-9d1e-0c3b5d7e9a10"))]
    pub id: String,
    /// Identifier of the owning user
    #[cfg_attr(feature = "openapi", schema(example = "firebase-uid-123"))]
    pub owner_user_id: String,
    #[cfg_attr(feature = "openapi", schema(example = "Barberia da Mario"))]
    pub name: String,
    /// Assigned by the server on creation
    #[serde(with = "crate::time::iso_millis")]
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = DateTime))]
    pub created_at: DateTime<Utc>,
}

/// Validated input for creating a shop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShop {
    pub owner_user_id: String,
    pub name: String,
}

impl NewShop {
    /// Validate a `{uid, name}` request body.
    pub fn from_json(payload: &Value) -> DomainResult<Self> {
        Ok(Self {
            owner_user_id: require_string(payload.get("uid"), "uid")?,
            name: require_string(payload.get("name"), "name")?,
        })
    }
}
