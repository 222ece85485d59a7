//! Booking service - the booking creation pipeline and day queries.
//!
//! Creation runs validate -> service lookup -> end time -> insert, in that
//! order and without retries. Nothing touches the store until the whole
//! request has validated.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::validation::{require_day, require_param};
use domain::{Booking, BookingRequest};

use crate::repository::{BookingRepository, ServiceRepository};

/// A stored booking, as reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedBooking {
    pub id: String,
    pub end_time: DateTime<Utc>,
}

/// Booking service trait for dependency injection.
#[async_trait]
pub trait BookingService: Send + Sync {
    /// List a shop's bookings starting on the given `YYYY-MM-DD` day (UTC)
    async fn list_for_day(&self, shop_id: Option<&str>, date: Option<&str>) -> AppResult<Vec<Booking>>;

    /// Validate, schedule and store a booking
    async fn create_booking(&self, payload: &Value) -> AppResult<CreatedBooking>;
}

/// Concrete implementation of BookingService using repositories.
pub struct BookingManager {
    services: Arc<dyn ServiceRepository>,
    bookings: Arc<dyn BookingRepository>,
}

impl BookingManager {
    /// Create new booking service instance with repositories
    pub fn new(services: Arc<dyn ServiceRepository>, bookings: Arc<dyn BookingRepository>) -> Self {
        Self { services, bookings }
    }
}

#[async_trait]
impl BookingService for BookingManager {
    async fn list_for_day(&self, shop_id: Option<&str>, date: Option<&str>) -> AppResult<Vec<Booking>> {
        let shop_id = require_param(shop_id, "shopId")?;
        let range = require_day(date, "date")?;

        self.bookings
            .list_between(&shop_id, range)
            .await
            .inspect_err(|e| {
                tracing::error!(operation = "list_bookings", shop_id = %shop_id, error = %e, "Booking listing failed");
            })
    }

    async fn create_booking(&self, payload: &Value) -> AppResult<CreatedBooking> {
        let request = BookingRequest::from_json(payload)?;
        let shop_id = request.shop_id.clone();
        let service_id = request.service_id.clone();

        let service = self
            .services
            .find(&shop_id, &service_id)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    operation = "create_booking",
                    shop_id = %shop_id,
                    service_id = %service_id,
                    error = %e,
                    "Service lookup failed"
                );
            })?
            .ok_or_not_found("Service")?;

        let booking = request.schedule(&service).map_err(|e| {
            tracing::error!(
                operation = "create_booking",
                shop_id = %shop_id,
                service_id = %service_id,
                error = %e,
                "Service cannot be booked"
            );
            AppError::from(e)
        })?;
        let end_time = booking.end_time;

        let id = self.bookings.create(booking).await.inspect_err(|e| {
            tracing::error!(
                operation = "create_booking",
                shop_id = %shop_id,
                service_id = %service_id,
                error = %e,
                "Booking insert failed"
            );
        })?;
        tracing::info!(shop_id = %shop_id, booking_id = %id, "Booking created");

        Ok(CreatedBooking { id, end_time })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::time::{format_instant, parse_instant};
    use domain::Service;
    use serde_json::json;

    use crate::repository::{MockBookingRepository, MockServiceRepository};

    fn haircut(duration_minutes: Option<f64>) -> Service {
        Service {
            id: "cut".to_string(),
            shop_id: "s1".to_string(),
            name: "Haircut".to_string(),
            duration_minutes,
            price: 20.0,
        }
    }

    fn booking_body() -> Value {
        json!({
            "shopId": "s1",
            "customerName": "Anna",
            "customerPhone": "333 123",
            "serviceId": "cut",
            "operatorId": "op-unknown",
            "startTime": "2024-03-15T09:00:00.000Z",
            "notes": "window seat"
        })
    }

    fn services_returning(service: Option<Service>) -> MockServiceRepository {
        let mut services = MockServiceRepository::new();
        services.expect_find().times(1).returning(move |shop_id, service_id| {
            assert_eq!((shop_id, service_id), ("s1", "cut"));
            Ok(service.clone())
        });
        services
    }

    #[tokio::test]
    async fn test_create_booking_computes_end_time() {
        let mut bookings = MockBookingRepository::new();
        bookings.expect_create().times(1).returning(|booking| {
            assert_eq!(format_instant(&booking.end_time), "2024-03-15T09:45:00.000Z");
            assert_eq!(booking.operator_id, "op-unknown");
            assert_eq!(booking.notes, "window seat");
            Ok("b-1".to_string())
        });

        let manager = BookingManager::new(
            Arc::new(services_returning(Some(haircut(Some(45.0))))),
            Arc::new(bookings),
        );
        let created = manager.create_booking(&booking_body()).await.unwrap();

        assert_eq!(created.id, "b-1");
        assert_eq!(created.end_time, parse_instant("2024-03-15T09:45:00Z").unwrap());
    }

    #[tokio::test]
    async fn test_create_booking_unknown_service() {
        let manager = BookingManager::new(
            Arc::new(services_returning(None)),
            Arc::new(MockBookingRepository::new()),
        );

        let result = manager.create_booking(&booking_body()).await;
        assert!(matches!(result, Err(AppError::NotFound(entity)) if entity == "Service"));
    }

    #[tokio::test]
    async fn test_create_booking_rejects_broken_service_duration() {
        for duration in [None, Some(0.0), Some(-10.0)] {
            let manager = BookingManager::new(
                Arc::new(services_returning(Some(haircut(duration)))),
                Arc::new(MockBookingRepository::new()),
            );

            let result = manager.create_booking(&booking_body()).await;
            assert!(
                matches!(result, Err(AppError::DataIntegrity { ref message, .. }) if message == "Invalid service configuration"),
                "{duration:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_create_booking_validates_before_lookup() {
        let manager = BookingManager::new(
            Arc::new(MockServiceRepository::new()),
            Arc::new(MockBookingRepository::new()),
        );

        let mut body = booking_body();
        body["startTime"] = json!("half past nine");
        let result = manager.create_booking(&body).await;
        assert!(matches!(result, Err(AppError::Validation(msg)) if msg.starts_with("startTime")));
    }

    #[tokio::test]
    async fn test_create_booking_store_failure() {
        let mut bookings = MockBookingRepository::new();
        bookings
            .expect_create()
            .returning(|_| Err(AppError::from(sea_orm::DbErr::Custom("insert failed".into()))));

        let manager = BookingManager::new(
            Arc::new(services_returning(Some(haircut(Some(30.0))))),
            Arc::new(bookings),
        );

        let result = manager.create_booking(&booking_body()).await;
        assert!(matches!(result, Err(AppError::Database(_))));
    }

    #[tokio::test]
    async fn test_list_for_day_queries_inclusive_range() {
        let mut bookings = MockBookingRepository::new();
        bookings.expect_list_between().times(1).returning(|shop_id, range| {
            assert_eq!(shop_id, "s1");
            assert_eq!(format_instant(&range.start), "2024-03-15T00:00:00.000Z");
            assert_eq!(format_instant(&range.end), "2024-03-15T23:59:59.999Z");
            Ok(Vec::new())
        });

        let manager = BookingManager::new(Arc::new(MockServiceRepository::new()), Arc::new(bookings));
        assert!(manager
            .list_for_day(Some("s1"), Some("2024-03-15"))
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_list_for_day_rejects_bad_date_without_store_access() {
        let manager = BookingManager::new(
            Arc::new(MockServiceRepository::new()),
            Arc::new(MockBookingRepository::new()),
        );

        for date in ["2024-3-15", "15/03/2024", ""] {
            let result = manager.list_for_day(Some("s1"), Some(date)).await;
            assert!(matches!(result, Err(AppError::Validation(_))), "{date}");
        }
    }
}
