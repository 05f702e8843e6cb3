//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes
//! - Authentication middleware
//! - Error-to-response mapping

pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use remit_core::quote::QuoteService;
use remit_shared::{AppError, TokenService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Quote calculation service.
    pub quote_service: Arc<QuoteService>,
    /// Token service for bearer authentication.
    pub token_service: Arc<TokenService>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Renders an application error as a JSON rejection response.
#[must_use]
pub fn error_response(err: &AppError) -> Response {
    let status = StatusCode::from_u16(err.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.to_string()
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_status() {
        assert_eq!(
            error_response(&AppError::InvalidAmount).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_response(&AppError::TokenExpired).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            error_response(&AppError::FeedUnavailable("down".into())).status(),
            StatusCode::BAD_GATEWAY
        );
    }
}
