//! Service catalog handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use common::AppResult;
use domain::Service;

use crate::api::extractors::{JsonBody, QueryParams};
use crate::api::handlers::operator_handler::ShopQuery;
use crate::api::state::AppState;

/// Service creation request (OpenAPI schema only; the body is read as raw JSON)
#[derive(Debug, ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateServiceRequest {
    pub shop_id: String,
    #[schema(example = "Haircut")]
    pub name: String,
    /// Must be greater than 0
    #[schema(example = 30)]
    pub duration_minutes: f64,
    /// Must be greater than or equal to 0
    #[schema(example = 20.0)]
    pub price: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceListResponse {
    pub services: Vec<Service>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCreatedResponse {
    pub service_id: String,
}

/// Create catalog routes
pub fn catalog_routes() -> Router<AppState> {
    Router::new().route("/services", get(list_services).post(create_service))
}

/// List a shop's services
#[utoipa::path(
    get,
    path = "/services",
    tag = "Services",
    params(ShopQuery),
    responses(
        (status = 200, description = "Services of the shop", body = ServiceListResponse),
        (status = 400, description = "Missing shopId")
    )
)]
pub async fn list_services(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ShopQuery>,
) -> AppResult<Json<ServiceListResponse>> {
    let services = state.catalog.list_services(query.shop_id.as_deref()).await?;
    Ok(Json(ServiceListResponse { services }))
}

/// Add a service to a shop's catalog
#[utoipa::path(
    post,
    path = "/services",
    tag = "Services",
    request_body = CreateServiceRequest,
    responses(
        (status = 201, description = "Service created", body = ServiceCreatedResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_service(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody,
) -> AppResult<(StatusCode, Json<ServiceCreatedResponse>)> {
    let service_id = state.catalog.create_service(&payload).await?;
    Ok((StatusCode::CREATED, Json(ServiceCreatedResponse { service_id })))
}
