//! Operator domain entity.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::DomainResult;
use crate::validation::{optional_object, require_string, require_string_array};

/// A member of staff who performs services at a shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Operator {
    pub id: String,
    pub shop_id: String,
    #[cfg_attr(feature = "openapi", schema(example = "Luigi"))]
    pub name: String,
    /// Services this operator can perform. Order carries no meaning.
    pub service_ids: Vec<String>,
    /// Free-form weekly schedule
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub working_hours: Map<String, Value>,
}

/// Validated input for creating an operator.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOperator {
    pub shop_id: String,
    pub name: String,
    pub service_ids: Vec<String>,
    pub working_hours: Map<String, Value>,
}

impl NewOperator {
    /// Validate a `{shopId, name, servicesIds, workingHours?}` request body.
    pub fn from_json(payload: &Value) -> DomainResult<Self> {
        Ok(Self {
            shop_id: require_string(payload.get("shopId"), "shopId")?,
            name: require_string(payload.get("name"), "name")?,
            service_ids: require_string_array(payload.get("servicesIds"), "servicesIds")?,
            working_hours: optional_object(payload.get("workingHours"), "workingHours")?,
        })
    }
}
