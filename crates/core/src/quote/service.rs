//! Quote service orchestrating rate fetches and fee-adjusted conversion.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use remit_shared::{AppError, Currency};

use crate::quote::conversion;
use crate::quote::fee::FeePolicy;
use crate::rates::{RateFeed, RateFeedError, RateSnapshot};

/// Fee-adjusted remittance quote.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Source amount in KRW.
    pub source_amount: Decimal,
    /// Fee deducted from the source amount, in KRW.
    pub fee: Decimal,
    /// KRW per USD at quote time.
    pub usd_exchange_rate: Decimal,
    /// Net amount priced in USD.
    pub usd_amount: Decimal,
    /// Requested target currency.
    pub target_currency: Currency,
    /// KRW per unit of the target currency at quote time.
    pub exchange_rate: Decimal,
    /// Net amount priced in the target currency.
    pub target_amount: Decimal,
    /// When the quote was computed.
    pub requested_at: DateTime<Utc>,
}

/// Errors that can occur while calculating a quote.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Source amount is not positive or does not exceed the fee.
    #[error("source amount must be positive and exceed the fee")]
    InvalidAmount,

    /// Target currency is not supported.
    #[error("unsupported target currency: {0}")]
    InvalidCurrency(String),

    /// The exchange rate feed failed.
    #[error(transparent)]
    Feed(#[from] RateFeedError),
}

impl From<QuoteError> for AppError {
    fn from(err: QuoteError) -> Self {
        match err {
            QuoteError::InvalidAmount => Self::InvalidAmount,
            QuoteError::InvalidCurrency(code) => Self::InvalidCurrency(code),
            QuoteError::Feed(RateFeedError::Network(reason)) => Self::FeedUnavailable(reason),
            QuoteError::Feed(RateFeedError::Parse(reason)) => Self::FeedInvalidResponse(reason),
        }
    }
}

/// Calculates fee-adjusted remittance quotes.
pub struct QuoteService {
    feed: Arc<dyn RateFeed>,
    fee_policy: FeePolicy,
}

impl QuoteService {
    /// Creates a quote service over the given rate feed and fee policy.
    #[must_use]
    pub fn new(feed: Arc<dyn RateFeed>, fee_policy: FeePolicy) -> Self {
        Self { feed, fee_policy }
    }

    /// Produces a quote converting `source_amount` KRW into `target_currency`.
    ///
    /// The USD cross-rate is always fetched first; a second fetch covers
    /// non-USD targets. The two fetches are not atomic with respect to each
    /// other, and nothing is fetched for an unrecognized currency or an
    /// invalid amount.
    ///
    /// # Errors
    ///
    /// Returns `QuoteError::InvalidCurrency` for an unsupported target,
    /// `QuoteError::InvalidAmount` unless `0 < fee < source_amount`, and
    /// propagates feed failures as `QuoteError::Feed`.
    pub async fn quote(
        &self,
        source_amount: Decimal,
        target_currency: &str,
    ) -> Result<Quote, QuoteError> {
        let target: Currency = target_currency
            .parse()
            .map_err(|_| QuoteError::InvalidCurrency(target_currency.to_string()))?;

        let fee = self.fee_policy.fee_for(source_amount);
        if source_amount <= Decimal::ZERO || source_amount <= fee {
            return Err(QuoteError::InvalidAmount);
        }
        let net_krw = source_amount - fee;

        let usd = self.feed.fetch(Currency::Usd).await?;
        let usd_rate = positive_unit_rate(&usd)?;
        let usd_amount =
            conversion::truncate_dp(net_krw / usd_rate, Currency::Usd.decimal_places());

        let (exchange_rate, target_amount) = if target == Currency::Usd {
            (usd_rate, usd_amount)
        } else {
            let snapshot = self.feed.fetch(target).await?;
            let rate = positive_unit_rate(&snapshot)?;
            let amount = conversion::krw_to_currency(net_krw, rate, target.decimal_places());
            (rate, amount)
        };

        Ok(Quote {
            source_amount,
            fee,
            usd_exchange_rate: usd_rate,
            usd_amount,
            target_currency: target,
            exchange_rate,
            target_amount,
            requested_at: Utc::now(),
        })
    }
}

/// Extracts the per-unit rate, rejecting a snapshot that would divide by zero.
fn positive_unit_rate(snapshot: &RateSnapshot) -> Result<Decimal, QuoteError> {
    let rate = snapshot.unit_rate();
    if rate <= Decimal::ZERO {
        return Err(RateFeedError::Parse(format!(
            "non-positive rate for {}",
            snapshot.currency
        ))
        .into());
    }
    Ok(rate)
}
