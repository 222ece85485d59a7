//! Application state for dependency injection.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::repository::Repositories;
use crate::service::{
    BookingManager, BookingService, CatalogManager, CatalogService, OperatorManager,
    OperatorService, PlaceholderSlots, ShopManager, ShopService, SlotProvider,
};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub shops: Arc<dyn ShopService>,
    pub operators: Arc<dyn OperatorService>,
    pub catalog: Arc<dyn CatalogService>,
    pub bookings: Arc<dyn BookingService>,
    pub slots: Arc<dyn SlotProvider>,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        shops: Arc<dyn ShopService>,
        operators: Arc<dyn OperatorService>,
        catalog: Arc<dyn CatalogService>,
        bookings: Arc<dyn BookingService>,
        slots: Arc<dyn SlotProvider>,
    ) -> Self {
        Self {
            shops,
            operators,
            catalog,
            bookings,
            slots,
        }
    }

    /// Wire the services over a set of repositories.
    pub fn from_repositories(repos: Repositories) -> Self {
        Self::new(
            Arc::new(ShopManager::new(repos.shops)),
            Arc::new(OperatorManager::new(repos.operators)),
            Arc::new(CatalogManager::new(repos.services.clone())),
            Arc::new(BookingManager::new(repos.services, repos.bookings)),
            Arc::new(PlaceholderSlots),
        )
    }

    /// Wire the SeaORM-backed services over a connection pool.
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self::from_repositories(Repositories::from_connection(db))
    }
}
