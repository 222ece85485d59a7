//! Appointment slots.
//!
//! Availability is not computed yet: the listing returns the same fixed
//! intervals for any request. See [`Slot::placeholders`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::PLACEHOLDER_SLOTS;
use crate::error::DomainResult;
use crate::validation::{optional_string, require_string, require_string_array};

/// A bookable interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Slot {
    #[cfg_attr(feature = "openapi", schema(example = "2024-03-15T09:00:00.000Z"))]
    pub start: String,
    #[cfg_attr(feature = "openapi", schema(example = "2024-03-15T09:30:00.000Z"))]
    pub end: String,
    pub available: bool,
}

impl Slot {
    /// The fixed stand-in intervals for `date`, all marked available.
    pub fn placeholders(date: &str) -> Vec<Slot> {
        PLACEHOLDER_SLOTS
            .iter()
            .map(|(start, end)| Slot {
                start: format!("{date}T{start}Z"),
                end: format!("{date}T{end}Z"),
                available: true,
            })
            .collect()
    }
}

/// A validated slot listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotQuery {
    pub date: String,
    pub service_ids: Vec<String>,
    pub operator_id: Option<String>,
}

impl SlotQuery {
    /// Validate a `{date, serviceIds, operatorId?}` request body.
    pub fn from_json(payload: &Value) -> DomainResult<Self> {
        Ok(Self {
            date: require_string(payload.get("date"), "date")?,
            service_ids: require_string_array(payload.get("serviceIds"), "serviceIds")?,
            operator_id: optional_string(payload.get("operatorId")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_placeholders() {
        let slots = Slot::placeholders("2024-03-15");
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].start, "2024-03-15T09:00:00.000Z");
        assert_eq!(slots[1].end, "2024-03-15T10:00:00.000Z");
        assert!(slots.iter().all(|slot| slot.available));
    }

    #[test]
    fn test_slot_query_requires_date_and_services() {
        let query = SlotQuery::from_json(&json!({"date": "2024-03-15", "serviceIds": ["cut"]})).unwrap();
        assert_eq!(query.operator_id, None);

        let err = SlotQuery::from_json(&json!({"serviceIds": ["cut"]})).unwrap_err();
        assert_eq!(err.field(), Some("date"));

        let err = SlotQuery::from_json(&json!({"date": "2024-03-15"})).unwrap_err();
        assert_eq!(err.field(), Some("serviceIds"));
    }
}
