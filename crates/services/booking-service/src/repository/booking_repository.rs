//! Booking repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::entities::booking::{self, ActiveModel, Entity as BookingEntity};
use common::{AppError, AppResult};
use domain::{Booking, DayRange, NewBooking};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Booking repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// List a shop's bookings starting within `range` (inclusive).
    ///
    /// Results come back in store order.
    async fn list_between(&self, shop_id: &str, range: DayRange) -> AppResult<Vec<Booking>>;

    /// Store a new booking and return its generated id.
    ///
    /// No overlap check is made against existing bookings.
    async fn create(&self, booking: NewBooking) -> AppResult<String>;
}

/// Concrete implementation of BookingRepository
pub struct BookingStore {
    db: DatabaseConnection,
}

impl BookingStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookingRepository for BookingStore {
    async fn list_between(&self, shop_id: &str, range: DayRange) -> AppResult<Vec<Booking>> {
        let models = BookingEntity::find()
            .filter(booking::Column::ShopId.eq(shop_id))
            .filter(booking::Column::StartTime.between(range.start, range.end))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Booking::from).collect())
    }

    async fn create(&self, booking: NewBooking) -> AppResult<String> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            shop_id: Set(booking.shop_id),
            customer_name: Set(booking.customer_name),
            customer_phone: Set(booking.customer_phone),
            service_id: Set(booking.service_id),
            operator_id: Set(booking.operator_id),
            start_time: Set(booking.start_time),
            end_time: Set(booking.end_time),
            notes: Set(booking.notes),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(model.id)
    }
}
