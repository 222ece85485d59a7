//! Raw JSON body extractor.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde_json::Value;

use common::AppError;

/// A request body parsed as untyped JSON.
///
/// Field validation happens in the domain layer, so the body is kept as a
/// [`Value`]. Malformed JSON or a wrong content type becomes a 400.
///
/// ```rust,ignore
/// async fn create_shop(JsonBody(payload): JsonBody) {
///     let shop = NewShop::from_json(&payload)?;
/// }
/// ```
pub struct JsonBody(pub Value);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
    Json<Value>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        Ok(JsonBody(value))
    }
}
