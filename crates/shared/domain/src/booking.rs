//! Booking domain entity and scheduling rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{DEFAULT_NOTES, INVALID_SERVICE_MESSAGE};
use crate::error::{DomainError, DomainResult};
use crate::service::Service;
use crate::time::add_minutes;
use crate::validation::{require_instant, require_string, string_or};

/// A customer appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub shop_id: String,
    #[cfg_attr(feature = "openapi", schema(example = "Anna Rossi"))]
    pub customer_name: String,
    #[cfg_attr(feature = "openapi", schema(example = "+39 333 1234567"))]
    pub customer_phone: String,
    pub service_id: String,
    pub operator_id: String,
    #[serde(with = "crate::time::iso_millis")]
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = DateTime))]
    pub start_time: DateTime<Utc>,
    /// Start time plus the service duration at the moment of booking
    #[serde(with = "crate::time::iso_millis")]
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = DateTime))]
    pub end_time: DateTime<Utc>,
    pub notes: String,
}

/// A validated booking request, before the service has been looked up.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    pub shop_id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub service_id: String,
    /// Taken as given; never checked against the shop's operators
    pub operator_id: String,
    pub start_time: DateTime<Utc>,
    pub notes: String,
}

impl BookingRequest {
    /// Validate a booking request body.
    ///
    /// Fields are checked in a fixed order and the first failure is returned.
    pub fn from_json(payload: &Value) -> DomainResult<Self> {
        Ok(Self {
            shop_id: require_string(payload.get("shopId"), "shopId")?,
            customer_name: require_string(payload.get("customerName"), "customerName")?,
            customer_phone: require_string(payload.get("customerPhone"), "customerPhone")?,
            service_id: require_string(payload.get("serviceId"), "serviceId")?,
            operator_id: require_string(payload.get("operatorId"), "operatorId")?,
            start_time: require_instant(payload.get("startTime"), "startTime")?,
            notes: string_or(payload.get("notes"), DEFAULT_NOTES),
        })
    }

    /// Fix the end time from the booked service's duration.
    pub fn schedule(self, service: &Service) -> DomainResult<NewBooking> {
        let minutes = service.bookable_duration()?;
        let end_time = add_minutes(self.start_time, minutes).ok_or_else(|| {
            DomainError::data_integrity(
                INVALID_SERVICE_MESSAGE,
                format!("service {} duration {minutes} overflows the calendar", service.id),
            )
        })?;

        Ok(NewBooking {
            shop_id: self.shop_id,
            customer_name: self.customer_name,
            customer_phone: self.customer_phone,
            service_id: self.service_id,
            operator_id: self.operator_id,
            start_time: self.start_time,
            end_time,
            notes: self.notes,
        })
    }
}

/// A booking ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub shop_id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub service_id: String,
    pub operator_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{format_instant, parse_instant};
    use serde_json::json;

    fn request_body() -> Value {
        json!({
            "shopId": "s1",
            "customerName": " Anna ",
            "customerPhone": "333",
            "serviceId": "cut",
            "operatorId": "op-anything",
            "startTime": "2024-03-15T09:00:00.000Z"
        })
    }

    fn haircut(duration_minutes: Option<f64>) -> Service {
        Service {
            id: "cut".to_string(),
            shop_id: "s1".to_string(),
            name: "Haircut".to_string(),
            duration_minutes,
            price: 20.0,
        }
    }

    #[test]
    fn test_request_from_json_defaults_notes() {
        let request = BookingRequest::from_json(&request_body()).unwrap();
        assert_eq!(request.customer_name, "Anna");
        assert_eq!(request.notes, "");

        let mut body = request_body();
        body["notes"] = json!(42);
        assert_eq!(BookingRequest::from_json(&body).unwrap().notes, "");

        body["notes"] = json!("first visit");
        assert_eq!(BookingRequest::from_json(&body).unwrap().notes, "first visit");
    }

    #[test]
    fn test_request_reports_fields_in_order() {
        let err = BookingRequest::from_json(&json!({})).unwrap_err();
        assert_eq!(err.field(), Some("shopId"));

        let mut body = request_body();
        body["operatorId"] = json!("");
        body["startTime"] = json!("garbage");
        let err = BookingRequest::from_json(&body).unwrap_err();
        assert_eq!(err.field(), Some("operatorId"));
    }

    #[test]
    fn test_request_rejects_unparseable_start() {
        let mut body = request_body();
        body["startTime"] = json!("next tuesday");
        let err = BookingRequest::from_json(&body).unwrap_err();
        assert_eq!(err.field(), Some("startTime"));
    }

    #[test]
    fn test_schedule_adds_service_duration() {
        let booking = BookingRequest::from_json(&request_body())
            .unwrap()
            .schedule(&haircut(Some(45.0)))
            .unwrap();

        assert_eq!(booking.start_time, parse_instant("2024-03-15T09:00:00Z").unwrap());
        assert_eq!(format_instant(&booking.end_time), "2024-03-15T09:45:00.000Z");
        assert_eq!(booking.operator_id, "op-anything");
    }

    #[test]
    fn test_schedule_refuses_broken_duration() {
        for duration in [None, Some(0.0), Some(-30.0)] {
            let err = BookingRequest::from_json(&request_body())
                .unwrap()
                .schedule(&haircut(duration))
                .unwrap_err();
            assert!(matches!(err, DomainError::DataIntegrity { .. }));
        }
    }
}
