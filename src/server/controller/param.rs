//! Request extractors shared by the controllers.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header::CONTENT_TYPE, request::Parts},
    Json,
};
use serde_json::{Map, Value};

use crate::server::{error::AppError, util::parse::parse_record_id};

/// Error reported when the request body cannot be read as a JSON object.
pub const INVALID_BODY_MESSAGE: &str = "request body should be a JSON object";

/// Record id taken from the `{id}` path segment.
///
/// Rejects with `AppError::InvalidId` unless the segment reads as a non-zero number, so
/// handlers taking this extractor never run for a malformed id. Holds `None` for a
/// number no record can have, such as `1.5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdParam(pub Option<i32>);

impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::InvalidId)?;

        parse_record_id(&raw).map(Self)
    }
}

/// Request body parsed as a JSON object with its keys in request order.
///
/// Field types are not checked here; that is left to the parameter models so every
/// violation can be reported together. A request with no body and no `Content-Type`
/// reads as an empty object.
#[derive(Debug, Clone)]
pub struct JsonObjectParam(pub Map<String, Value>);

impl<S> FromRequest<S> for JsonObjectParam
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !req.headers().contains_key(CONTENT_TYPE) {
            let body = Bytes::from_request(req, state)
                .await
                .map_err(|rejection| invalid_body(rejection.body_text()))?;

            if body.is_empty() {
                return Ok(Self(Map::new()));
            }

            return Err(invalid_body("Missing `Content-Type` header".to_string()));
        }

        let Json(payload) = Json::<Map<String, Value>>::from_request(req, state)
            .await
            .map_err(|rejection| invalid_body(rejection.body_text()))?;

        Ok(Self(payload))
    }
}

fn invalid_body(reason: String) -> AppError {
    tracing::debug!("Rejected request body: {}", reason);
    AppError::Validation(vec![INVALID_BODY_MESSAGE.to_string()])
}
