//! Upbit forex feed client.
//!
//! One read-only GET per fetch against the recent-quotes endpoint; the first
//! element of the JSON array response carries the quoted price and its
//! quote-unit exponent.

use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::Deserialize;
use tracing::{debug, warn};

use remit_core::rates::{RateFeed, RateFeedError, RateSnapshot};
use remit_shared::Currency;
use remit_shared::config::FeedConfig;

/// Reqwest-backed rate feed against the Upbit forex endpoint.
pub struct UpbitFeed {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
    retry_backoff: Duration,
}

impl UpbitFeed {
    /// Builds a feed client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `RateFeedError::Network` if the HTTP client cannot be built.
    pub fn new(config: &FeedConfig) -> Result<Self, RateFeedError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RateFeedError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            max_retries: config.max_retries,
            retry_backoff: Duration::from_millis(config.retry_backoff_ms),
        })
    }

    /// Provider instrument code for a currency's KRW cross pair.
    fn instrument_code(currency: Currency) -> &'static str {
        match currency {
            Currency::Usd => "FRX.KRWUSD",
            Currency::Jpy => "FRX.KRWJPY",
        }
    }

    async fn fetch_once(&self, currency: Currency) -> Result<RateSnapshot, RateFeedError> {
        let url = format!(
            "{}?codes={}",
            self.base_url,
            Self::instrument_code(currency)
        );
        debug!(%currency, url = %url, "requesting exchange rate");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RateFeedError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RateFeedError::Network(format!(
                "provider returned {status}"
            )));
        }

        let rows: Vec<ForexRow> = response
            .json()
            .await
            .map_err(|e| RateFeedError::Parse(e.to_string()))?;

        rows.into_iter()
            .next()
            .ok_or_else(|| RateFeedError::Parse("empty forex response".to_string()))?
            .into_snapshot(currency)
    }
}

#[async_trait]
impl RateFeed for UpbitFeed {
    async fn fetch(&self, currency: Currency) -> Result<RateSnapshot, RateFeedError> {
        let mut attempt = 0;
        loop {
            match self.fetch_once(currency).await {
                Ok(snapshot) => return Ok(snapshot),
                // Only transport failures are worth retrying.
                Err(RateFeedError::Network(reason)) if attempt < self.max_retries => {
                    attempt += 1;
                    warn!(
                        %currency,
                        attempt,
                        max_retries = self.max_retries,
                        reason = %reason,
                        "exchange rate fetch failed, retrying"
                    );
                    tokio::time::sleep(self.retry_backoff).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Element of the provider's JSON array response.
#[derive(Debug, Deserialize)]
struct ForexRow {
    #[serde(rename = "currencyCode")]
    currency_code: String,
    #[serde(rename = "basePrice")]
    base_price: f64,
    #[serde(rename = "recurrenceCount")]
    recurrence_count: u32,
}

impl ForexRow {
    fn into_snapshot(self, currency: Currency) -> Result<RateSnapshot, RateFeedError> {
        if self.currency_code != currency.to_string() {
            return Err(RateFeedError::Parse(format!(
                "requested {currency}, provider sent {}",
                self.currency_code
            )));
        }

        let base_price = Decimal::from_f64(self.base_price)
            .ok_or_else(|| RateFeedError::Parse(format!("unusable base price {}", self.base_price)))?;
        if base_price <= Decimal::ZERO {
            return Err(RateFeedError::Parse(format!(
                "non-positive base price {base_price}"
            )));
        }

        Ok(RateSnapshot::new(currency, base_price, self.recurrence_count))
    }
}
