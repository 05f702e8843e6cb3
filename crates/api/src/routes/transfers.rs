//! Remittance transfer routes: quote calculation and trade history.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{error, info};

use crate::{AppState, error_response, middleware::AuthUser};
use remit_shared::AppError;

/// Creates the transfer routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transfer/quote", post(calculate_quote))
        .route("/transfer/list", get(list_trades))
}

/// Request body for a remittance quote.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    /// Source amount in KRW.
    pub source_amount: Decimal,
    /// Target currency ISO code.
    pub target_currency: String,
}

/// POST `/transfer/quote` - Calculate a fee-adjusted remittance quote.
async fn calculate_quote(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<QuoteRequest>,
) -> impl IntoResponse {
    match state
        .quote_service
        .quote(payload.source_amount, &payload.target_currency)
        .await
    {
        Ok(quote) => {
            info!(
                user_id = %auth.user_id(),
                target_currency = %quote.target_currency,
                target_amount = %quote.target_amount,
                "Quote calculated"
            );
            (StatusCode::OK, Json(json!(quote))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to calculate quote");
            error_response(&AppError::from(e))
        }
    }
}

/// GET `/transfer/list` - List the member's trade history.
///
/// Serves sample rows; there is no trade store behind this endpoint.
async fn list_trades(auth: AuthUser) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "userId": auth.user_id(),
            "name": "Demo Member",
            "todayTransferCount": 1,
            "todayTransferUsdAmount": 457.10,
            "history": sample_history()
        })),
    )
}

fn sample_history() -> Value {
    json!([
        {
            "sourceAmount": 400_000,
            "fee": 3000,
            "usdExchangeRate": 1301.01,
            "usdAmount": 305.14,
            "targetCurrency": "USD",
            "exchangeRate": 1301.01,
            "targetAmount": 305.14,
            "requestedDate": "2023-12-01 10:30:21"
        },
        {
            "sourceAmount": 300_000,
            "fee": 3000,
            "usdExchangeRate": 1301.01,
            "usdAmount": 228.28,
            "targetCurrency": "JPY",
            "exchangeRate": 9.0565,
            "targetAmount": 32_794,
            "requestedDate": "2023-12-06 15:27:53"
        },
        {
            "sourceAmount": 605_000,
            "fee": 3000,
            "usdExchangeRate": 1317.00,
            "usdAmount": 457.10,
            "targetCurrency": "USD",
            "exchangeRate": 1317.00,
            "targetAmount": 457.10,
            "requestedDate": "2023-12-21 09:50:55"
        }
    ])
}
