//! Request extractors shared by the controllers.

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde_json::Value;

use crate::server::error::AppError;

/// Raw JSON request body.
///
/// Bodies are kept as untyped JSON so that field validation can report every missing or
/// invalid field at once instead of stopping at the first deserialization failure.
/// Extraction failures (malformed JSON, missing `application/json` content type) are
/// reported as 400 Bad Request in the standard error shape.
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(Self(value))
    }
}
