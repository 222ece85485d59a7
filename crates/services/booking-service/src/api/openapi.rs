//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::api::handlers::booking_handler::{
    BookingCreatedResponse, BookingListResponse, CreateBookingRequest,
};
use crate::api::handlers::catalog_handler::{
    CreateServiceRequest, ServiceCreatedResponse, ServiceListResponse,
};
use crate::api::handlers::health_handler::HealthResponse;
use crate::api::handlers::operator_handler::{
    CreateOperatorRequest, OperatorCreatedResponse, OperatorListResponse,
};
use crate::api::handlers::shop_handler::{
    CreateShopRequest, ShopCreatedResponse, ShopLookupResponse,
};
use crate::api::handlers::slot_handler::{SlotListResponse, SlotRequest};
use domain::{Booking, Operator, Service, Shop, Slot};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::health_handler::health_check,
        crate::api::handlers::shop_handler::get_shop,
        crate::api::handlers::shop_handler::create_shop,
        crate::api::handlers::operator_handler::list_operators,
        crate::api::handlers::operator_handler::create_operator,
        crate::api::handlers::catalog_handler::list_services,
        crate::api::handlers::catalog_handler::create_service,
        crate::api::handlers::booking_handler::list_bookings,
        crate::api::handlers::booking_handler::create_booking,
        crate::api::handlers::slot_handler::list_slots,
    ),
    components(
        schemas(
            HealthResponse,
            Shop,
            CreateShopRequest,
            ShopLookupResponse,
            ShopCreatedResponse,
            Operator,
            CreateOperatorRequest,
            OperatorListResponse,
            OperatorCreatedResponse,
            Service,
            CreateServiceRequest,
            ServiceListResponse,
            ServiceCreatedResponse,
            Booking,
            CreateBookingRequest,
            BookingListResponse,
            BookingCreatedResponse,
            Slot,
            SlotRequest,
            SlotListResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness probe"),
        (name = "Shops", description = "Shop registration and owner lookup"),
        (name = "Operators", description = "Shop staff"),
        (name = "Services", description = "Shop service catalog"),
        (name = "Bookings", description = "Customer appointments"),
        (name = "Slots", description = "Bookable intervals (placeholder)"),
    )
)]
pub struct ApiDoc;
