//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::models::ValidationError;
use super::error::ApiError;

/// JSON body whose rejections render as `ApiError`.
///
/// An empty (or all-whitespace) body reads as `T::default()`, so a bare
/// `PATCH` is a no-op and a bare `POST` creates an all-default record.
/// A non-empty body must be JSON; a missing content type is tolerated.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            ApiError::Validation(ValidationError::InvalidFormat {
                field: "body",
                reason: rejection.body_text(),
            })
        })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        if let Some(content_type) = content_type {
            if !content_type.contains("json") {
                return Err(ValidationError::InvalidFormat {
                    field: "body",
                    reason: format!("expected application/json, got '{}'", content_type),
                }
                .into());
            }
        }

        let Json(value) = Json::<T>::from_bytes(&bytes)?;
        Ok(Self(value))
    }
}

/// Company id from the path (any non-empty string)
pub struct CompanyId(pub String);

impl<S> FromRequestParts<S> for CompanyId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "company id" }))?;

        if id.trim().is_empty() {
            return Err(ValidationError::Empty { field: "company id" }.into());
        }
        Ok(Self(id))
    }
}

/// Order number from the path, parsed as an integer
pub struct OrderNum(pub i64);

impl<S> FromRequestParts<S> for OrderNum
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "order number" }))?;

        let ord_num = raw.trim().parse::<i64>().map_err(|_| {
            ApiError::Validation(ValidationError::InvalidFormat {
                field: "order number",
                reason: format!("'{}' is not an integer", raw),
            })
        })?;

        Ok(Self(ord_num))
    }
}
