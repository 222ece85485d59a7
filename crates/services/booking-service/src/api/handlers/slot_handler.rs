//! Slot handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::Serialize;
use utoipa::ToSchema;

use common::AppResult;
use domain::Slot;

use crate::api::extractors::JsonBody;
use crate::api::state::AppState;

/// Slot listing request (OpenAPI schema only; the body is read as raw JSON)
#[derive(Debug, ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct SlotRequest {
    #[schema(example = "2024-03-15")]
    pub date: String,
    pub service_ids: Vec<String>,
    pub operator_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SlotListResponse {
    pub slots: Vec<Slot>,
}

/// Create slot routes
pub fn slot_routes() -> Router<AppState> {
    Router::new().route("/slots", post(list_slots))
}

/// List bookable slots (placeholder intervals)
#[utoipa::path(
    post,
    path = "/slots",
    tag = "Slots",
    request_body = SlotRequest,
    responses(
        (status = 200, description = "Slots for the day", body = SlotListResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn list_slots(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody,
) -> AppResult<Json<SlotListResponse>> {
    let slots = state.slots.available_slots(&payload).await?;
    Ok(Json(SlotListResponse { slots }))
}
