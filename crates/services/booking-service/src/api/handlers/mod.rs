//! HTTP handlers, one module per resource.

pub mod booking_handler;
pub mod catalog_handler;
pub mod health_handler;
pub mod operator_handler;
pub mod shop_handler;
pub mod slot_handler;

pub use booking_handler::booking_routes;
pub use catalog_handler::catalog_routes;
pub use health_handler::health_routes;
pub use operator_handler::operator_routes;
pub use shop_handler::shop_routes;
pub use slot_handler::slot_routes;
