//! REST route handlers grouped by resource.

pub mod admin;
pub mod auth;
pub mod booking;
pub mod checkin;
pub mod reports;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// All resource routes mounted under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(booking::routes())
        .merge(checkin::routes())
        .merge(reports::routes())
        .merge(admin::routes())
        .merge(auth::routes())
}
