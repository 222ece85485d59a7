//! Shop handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use common::AppResult;
use domain::Shop;

use crate::api::extractors::{JsonBody, QueryParams};
use crate::api::state::AppState;

/// Shop registration request (OpenAPI schema only; the body is read as raw JSON)
#[derive(Debug, ToSchema)]
pub struct CreateShopRequest {
    /// Owner user id
    #[schema(example = "firebase-uid-123")]
    pub uid: String,
    #[schema(example = "Barberia da Mario")]
    pub name: String,
}

/// Owner lookup parameters
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OwnerQuery {
    /// Owner user id
    pub uid: Option<String>,
}

/// Owner lookup result. `shopId` and `data` are present only when a shop exists.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShopLookupResponse {
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Shop>,
}

/// Registration result. `alreadyExists` is present only when nothing was created.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShopCreatedResponse {
    pub shop_id: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub already_exists: bool,
}

/// Create shop routes
pub fn shop_routes() -> Router<AppState> {
    Router::new().route("/barbershop", get(get_shop).post(create_shop))
}

/// Find the shop owned by a user
#[utoipa::path(
    get,
    path = "/barbershop",
    tag = "Shops",
    params(OwnerQuery),
    responses(
        (status = 200, description = "Lookup result", body = ShopLookupResponse),
        (status = 400, description = "Missing uid")
    )
)]
pub async fn get_shop(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<OwnerQuery>,
) -> AppResult<Json<ShopLookupResponse>> {
    let shop = state.shops.find_by_owner(query.uid.as_deref()).await?;

    Ok(Json(ShopLookupResponse {
        exists: shop.is_some(),
        shop_id: shop.as_ref().map(|s| s.id.clone()),
        data: shop,
    }))
}

/// Register a shop for its owner (idempotent per owner)
#[utoipa::path(
    post,
    path = "/barbershop",
    tag = "Shops",
    request_body = CreateShopRequest,
    responses(
        (status = 201, description = "Shop created", body = ShopCreatedResponse),
        (status = 200, description = "Owner already has a shop", body = ShopCreatedResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_shop(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody,
) -> AppResult<(StatusCode, Json<ShopCreatedResponse>)> {
    let registration = state.shops.register(&payload).await?;

    let status = if registration.already_exists {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };

    Ok((
        status,
        Json(ShopCreatedResponse {
            shop_id: registration.shop_id,
            already_exists: registration.already_exists,
        }),
    ))
}
