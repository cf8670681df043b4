//! Unified error handling with Sentry integration.
//!
//! Provides a unified `ApiError` type that maps every failure onto the
//! `{"message": ...}` error payload. All route handlers should return
//! `Result<T, ApiError>`. Server errors are captured to Sentry before the
//! response is produced.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::services::CheckoutError;

/// Application-level error type for the API.
///
/// Every variant is terminal for its request: there are no retries and no
/// partial successes.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No user identity supplied on a request that requires one.
    #[error("User ID required")]
    MissingUserId,

    /// Malformed or unparsable request payload.
    #[error("Invalid request body")]
    InvalidBody(#[from] JsonRejection),

    /// Well-formed payload that fails a domain rule.
    #[error("{0}")]
    BadRequest(String),

    /// Product or order absent, or order not owned by the caller.
    #[error("{0}")]
    NotFound(String),

    /// Checkout attempted with no items in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Internal server error.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Product absent, or the path parameter was not a valid product ID.
    #[must_use]
    pub fn product_not_found() -> Self {
        Self::NotFound("Product not found".to_owned())
    }

    /// Order absent, or owned by a different user than the caller.
    #[must_use]
    pub fn order_not_found() -> Self {
        Self::NotFound("Order not found".to_owned())
    }
}

impl From<CheckoutError> for ApiError {
    fn from(err: CheckoutError) -> Self {
        match err {
            CheckoutError::EmptyCart => Self::EmptyCart,
            CheckoutError::ProductNotFound(id) => Self::NotFound(format!("Product {id} not found")),
        }
    }
}

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        // The client only sees the generic message; the parse detail goes to
        // the logs
        if let Self::InvalidBody(rejection) = &self {
            tracing::warn!(detail = %rejection.body_text(), "Rejected request body");
        }

        let status = match &self {
            Self::MissingUserId | Self::InvalidBody(_) | Self::BadRequest(_) | Self::EmptyCart => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorBody {
            message: self.to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;
