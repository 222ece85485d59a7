//! Booking handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use common::AppResult;
use domain::Booking;

use crate::api::extractors::{JsonBody, QueryParams};
use crate::api::state::AppState;

/// Booking request (OpenAPI schema only; the body is read as raw JSON)
#[derive(Debug, ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub shop_id: String,
    #[schema(example = "Anna Rossi")]
    pub customer_name: String,
    #[schema(example = "+39 333 1234567")]
    pub customer_phone: String,
    pub service_id: String,
    pub operator_id: String,
    #[schema(example = "2024-03-15T09:00:00.000Z")]
    pub start_time: String,
    /// Defaults to an empty string
    pub notes: Option<String>,
}

/// Day listing parameters
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DayQuery {
    pub shop_id: Option<String>,
    /// Calendar day in UTC, `YYYY-MM-DD`
    pub date: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingListResponse {
    pub bookings: Vec<Booking>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreatedResponse {
    pub booking_id: String,
    #[serde(with = "domain::time::iso_millis")]
    #[schema(value_type = String, example = "2024-03-15T09:30:00.000Z")]
    pub end_time: DateTime<Utc>,
}

/// Create booking routes
pub fn booking_routes() -> Router<AppState> {
    Router::new().route("/bookings", get(list_bookings).post(create_booking))
}

/// List a shop's bookings starting on a given day
#[utoipa::path(
    get,
    path = "/bookings",
    tag = "Bookings",
    params(DayQuery),
    responses(
        (status = 200, description = "Bookings starting that day", body = BookingListResponse),
        (status = 400, description = "Missing shopId or malformed date")
    )
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<DayQuery>,
) -> AppResult<Json<BookingListResponse>> {
    let bookings = state
        .bookings
        .list_for_day(query.shop_id.as_deref(), query.date.as_deref())
        .await?;
    Ok(Json(BookingListResponse { bookings }))
}

/// Book a service; the end time is derived from the service duration
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "Bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created", body = BookingCreatedResponse),
        (status = 400, description = "Validation error or unknown service"),
        (status = 500, description = "Service has no usable duration")
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody,
) -> AppResult<(StatusCode, Json<BookingCreatedResponse>)> {
    let created = state.bookings.create_booking(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingCreatedResponse {
            booking_id: created.id,
            end_time: created.end_time,
        }),
    ))
}
