//! Repository layer for data access.
//!
//! One repository per collection; every child lookup is scoped by shop id.

mod booking_repository;
pub mod entities;
mod operator_repository;
mod service_repository;
mod shop_repository;

use std::sync::Arc;

use sea_orm::DatabaseConnection;

pub use booking_repository::{BookingRepository, BookingStore};
pub use operator_repository::{OperatorRepository, OperatorStore};
pub use service_repository::{ServiceRepository, ServiceStore};
pub use shop_repository::{ShopRepository, ShopStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use booking_repository::MockBookingRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use operator_repository::MockOperatorRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use service_repository::MockServiceRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use shop_repository::MockShopRepository;

/// All repositories, sharing one store handle.
#[derive(Clone)]
pub struct Repositories {
    pub shops: Arc<dyn ShopRepository>,
    pub operators: Arc<dyn OperatorRepository>,
    pub services: Arc<dyn ServiceRepository>,
    pub bookings: Arc<dyn BookingRepository>,
}

impl Repositories {
    /// Build the SeaORM-backed repositories over a connection pool.
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self {
            shops: Arc::new(ShopStore::new(db.clone())),
            operators: Arc::new(OperatorStore::new(db.clone())),
            services: Arc::new(ServiceStore::new(db.clone())),
            bookings: Arc::new(BookingStore::new(db)),
        }
    }
}
