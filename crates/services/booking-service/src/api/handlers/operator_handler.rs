//! Operator handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use common::AppResult;
use domain::Operator;

use crate::api::extractors::{JsonBody, QueryParams};
use crate::api::state::AppState;

/// Operator creation request (OpenAPI schema only; the body is read as raw JSON)
#[derive(Debug, ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateOperatorRequest {
    pub shop_id: String,
    #[schema(example = "Luigi")]
    pub name: String,
    /// Ids of the services the operator performs
    pub services_ids: Vec<String>,
    /// Free-form weekly schedule, `{}` when omitted
    #[schema(value_type = Object)]
    pub working_hours: Option<Value>,
}

/// Shop-scoped listing parameters
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ShopQuery {
    pub shop_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OperatorListResponse {
    pub operators: Vec<Operator>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OperatorCreatedResponse {
    pub operator_id: String,
}

/// Create operator routes
pub fn operator_routes() -> Router<AppState> {
    Router::new().route("/operators", get(list_operators).post(create_operator))
}

/// List a shop's operators
#[utoipa::path(
    get,
    path = "/operators",
    tag = "Operators",
    params(ShopQuery),
    responses(
        (status = 200, description = "Operators of the shop", body = OperatorListResponse),
        (status = 400, description = "Missing shopId")
    )
)]
pub async fn list_operators(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ShopQuery>,
) -> AppResult<Json<OperatorListResponse>> {
    let operators = state.operators.list_operators(query.shop_id.as_deref()).await?;
    Ok(Json(OperatorListResponse { operators }))
}

/// Add an operator to a shop
#[utoipa::path(
    post,
    path = "/operators",
    tag = "Operators",
    request_body = CreateOperatorRequest,
    responses(
        (status = 201, description = "Operator created", body = OperatorCreatedResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_operator(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody,
) -> AppResult<(StatusCode, Json<OperatorCreatedResponse>)> {
    let operator_id = state.operators.create_operator(&payload).await?;
    Ok((StatusCode::CREATED, Json(OperatorCreatedResponse { operator_id })))
}
