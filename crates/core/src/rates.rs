//! Exchange rate snapshots and the feed abstraction.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use remit_shared::Currency;

/// Point-in-time exchange rate for one currency against KRW.
///
/// Immutable once fetched; one instance per currency per fetch call. Results
/// are never cached, so concurrent requests each see their own snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSnapshot {
    /// Currency this snapshot quotes.
    pub currency: Currency,
    /// KRW price for `10^scale` units of the currency.
    pub base_price: Decimal,
    /// Quote-unit exponent used by the provider (JPY is quoted per 100 units).
    pub scale: u32,
}

impl RateSnapshot {
    /// Creates a new snapshot.
    #[must_use]
    pub const fn new(currency: Currency, base_price: Decimal, scale: u32) -> Self {
        Self {
            currency,
            base_price,
            scale,
        }
    }

    /// KRW rate for a single unit of the currency.
    #[must_use]
    pub fn unit_rate(&self) -> Decimal {
        self.base_price / Decimal::from(10u64.pow(self.scale))
    }
}

/// Errors that can occur while fetching an exchange rate.
#[derive(Debug, Error)]
pub enum RateFeedError {
    /// Transport failure, timeout, or non-success status from the provider.
    #[error("exchange rate feed request failed: {0}")]
    Network(String),

    /// Response was missing required fields or otherwise undecodable.
    #[error("exchange rate feed returned an invalid response: {0}")]
    Parse(String),
}

/// Capability to fetch a current exchange rate snapshot.
///
/// One read-only provider round trip per call; implementations guarantee a
/// positive `base_price` on success.
#[async_trait]
pub trait RateFeed: Send + Sync {
    /// Fetches the current snapshot for `currency`.
    async fn fetch(&self, currency: Currency) -> Result<RateSnapshot, RateFeedError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_unit_rate_without_scaling() {
        let snapshot = RateSnapshot::new(Currency::Usd, dec!(1301.01), 0);
        assert_eq!(snapshot.unit_rate(), dec!(1301.01));
    }

    #[test]
    fn test_unit_rate_scales_down_quote_unit() {
        // JPY is quoted per 100 units.
        let snapshot = RateSnapshot::new(Currency::Jpy, dec!(905.65), 2);
        assert_eq!(snapshot.unit_rate(), dec!(9.0565));
    }
}
