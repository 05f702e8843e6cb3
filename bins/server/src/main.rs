//! Remit API Server
//!
//! Main entry point for the remittance backend service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use remit_api::{AppState, create_router};
use remit_core::quote::{FeePolicy, QuoteService};
use remit_feed::UpbitFeed;
use remit_shared::{AppConfig, TokenService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "remit=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    // Build the exchange rate feed and quote service
    let feed = UpbitFeed::new(&config.feed)?;
    let quote_service = QuoteService::new(Arc::new(feed), FeePolicy::default());
    info!(feed_url = %config.feed.base_url, "Exchange rate feed configured");

    // Build the token service from the configured signing key
    let token_service = TokenService::new(&config.token)?;

    // Create application state
    let state = AppState {
        quote_service: Arc::new(quote_service),
        token_service: Arc::new(token_service),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
