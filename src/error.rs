//! Gateway error types with HTTP status code mapping.
//!
//! [`GatewayError`] is the central error type for the gateway. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::BookingRef;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2002,
///     "message": "booking already recorded: PSK-8F3A",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges on [`GatewayError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category        | HTTP Status                  |
/// |-----------|-----------------|------------------------------|
/// | 1000–1999 | Validation      | 400 Bad Request              |
/// | 2000–2999 | State/Not Found | 404 / 409 / 401              |
/// | 3000–3999 | Server          | 500 / 503                    |
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The requested ticket type is not in the catalog.
    #[error("unknown ticket type: {0}")]
    UnknownTicketType(String),

    /// Ticket counts are out of range for a booking.
    #[error("invalid ticket quantity: {0}")]
    InvalidQuantity(String),

    /// Request validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// No booking record exists for the given payment reference.
    #[error("booking not found: {0}")]
    BookingNotFound(BookingRef),

    /// A booking record with the same payment reference already exists.
    #[error("booking already recorded: {0}")]
    DuplicateBooking(BookingRef),

    /// Missing or invalid operator session token.
    #[error("operator session required")]
    Unauthorized,

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),

    /// The key-value storage medium is unavailable.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl GatewayError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::UnknownTicketType(_) => 1001,
            Self::InvalidQuantity(_) => 1002,
            Self::InvalidRequest(_) => 1003,
            Self::BookingNotFound(_) => 2001,
            Self::DuplicateBooking(_) => 2002,
            Self::Unauthorized => 2003,
            Self::Internal(_) => 3000,
            Self::StorageUnavailable(_) => 3001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::UnknownTicketType(_) | Self::InvalidQuantity(_) | Self::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::BookingNotFound(_) => StatusCode::NOT_FOUND,
            Self::DuplicateBooking(_) => StatusCode::CONFLICT,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        let err = GatewayError::UnknownTicketType("Gold".to_string());
        assert_eq!(err.error_code(), 1001);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = GatewayError::DuplicateBooking(BookingRef::from("T-1"));
        assert_eq!(err.error_code(), 2002);
        assert_eq!(err.status_code(), StatusCode::CONFLICT);

        let err = GatewayError::StorageUnavailable("quota exceeded".to_string());
        assert_eq!(err.error_code(), 3001);
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn error_response_exposes_a_schema() {
        use utoipa::{PartialSchema, ToSchema};
        assert_eq!(ErrorResponse::name(), "ErrorResponse");
        assert_eq!(ErrorBody::name(), "ErrorBody");
        // The schema must materialize for the path annotations to compose.
        let _ = ErrorResponse::schema();
    }

    #[test]
    fn not_found_is_404() {
        let err = GatewayError::BookingNotFound(BookingRef::from("MISSING"));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert!(err.to_string().contains("MISSING"));
    }
}
