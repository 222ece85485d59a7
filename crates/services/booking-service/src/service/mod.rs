//! Service layer - use cases over the repositories.

mod booking_service;
mod catalog_service;
mod operator_service;
mod shop_service;
mod slot_service;

pub use booking_service::{BookingManager, BookingService, CreatedBooking};
pub use catalog_service::{CatalogManager, CatalogService};
pub use operator_service::{OperatorManager, OperatorService};
pub use shop_service::{ShopManager, ShopRegistration, ShopService};
pub use slot_service::{PlaceholderSlots, SlotProvider};
