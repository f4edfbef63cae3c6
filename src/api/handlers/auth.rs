//! Operator session handlers: login and logout.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app_state::AppState;
use crate::auth;
use crate::error::{ErrorResponse, GatewayError};

/// Header carrying the operator session token.
pub const SESSION_HEADER: &str = "x-session-token";

/// Request body for `POST /sales/login`.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    /// Operator username.
    pub username: String,
    /// Operator password.
    pub password: String,
}

/// Response body for `POST /sales/login`.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    /// Opaque session token for the `x-session-token` header.
    pub token: Uuid,
    /// Echoed operator username.
    pub username: String,
}

/// Resolves the session header to an operator username.
///
/// # Errors
///
/// Returns [`GatewayError::Unauthorized`] if the header is missing,
/// malformed, or names a revoked session.
pub async fn require_operator(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<String, GatewayError> {
    let token = headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<Uuid>().ok())
        .ok_or(GatewayError::Unauthorized)?;
    state.sessions.operator_for(token).await
}

/// `POST /sales/login` — Authenticate an operator and open a session.
///
/// # Errors
///
/// Returns [`GatewayError::Unauthorized`] for bad credentials.
#[utoipa::path(
    post,
    path = "/api/v1/sales/login",
    tag = "Sales",
    summary = "Operator login",
    description = "Checks the credentials against the fixed operator table and issues an opaque session token.",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session opened", body = LoginResponse),
        (status = 401, description = "Incorrect credentials", body = ErrorResponse),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    if !auth::authenticate(&req.username, &req.password) {
        return Err(GatewayError::Unauthorized);
    }
    let token = state.sessions.issue(&req.username).await;
    tracing::info!(username = %req.username, "operator logged in");
    Ok(Json(LoginResponse {
        token,
        username: req.username,
    }))
}

/// `POST /sales/logout` — Revoke the current session.
///
/// # Errors
///
/// Returns [`GatewayError::Unauthorized`] without a valid session header.
#[utoipa::path(
    post,
    path = "/api/v1/sales/logout",
    tag = "Sales",
    summary = "Operator logout",
    description = "Revokes the session named by the x-session-token header.",
    responses(
        (status = 204, description = "Session revoked"),
        (status = 401, description = "No valid session", body = ErrorResponse),
    )
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, GatewayError> {
    let token = headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<Uuid>().ok())
        .ok_or(GatewayError::Unauthorized)?;
    state.sessions.revoke(token).await;
    Ok(StatusCode::NO_CONTENT)
}

/// Sales session routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sales/login", post(login))
        .route("/sales/logout", post(logout))
}
