//! Request extractors: caller identity and JSON bodies.

use axum::extract::{FromRequest, FromRequestParts};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use rustmart_core::UserId;

use crate::error::ApiError;

/// The HTTP header that carries the caller's identity.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The caller's identity, read from the `X-User-ID` header.
///
/// The value is trusted as-is; there is no authentication. Requests without
/// the header (or with an empty value) are rejected with 400 before the
/// handler runs.
#[derive(Debug, Clone)]
pub struct Identity(pub UserId);

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| Self(UserId::new(value)))
            .ok_or(ApiError::MissingUserId)
    }
}

/// JSON extractor that rejects malformed bodies with the API's error
/// payload instead of axum's plain-text default.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
