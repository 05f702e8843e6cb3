//! Fee-adjusted remittance quote calculation.
//!
//! A quote converts a KRW source amount into a target currency via the USD
//! cross-rate: the fee is deducted, the net amount priced in USD, and the
//! target amount derived from the target currency's own KRW rate.

pub mod conversion;
pub mod fee;
pub mod service;

pub use fee::FeePolicy;
pub use service::{Quote, QuoteError, QuoteService};
