//! Outbound exchange rate feed client.
//!
//! Implements the core [`RateFeed`](remit_core::rates::RateFeed) capability
//! against the provider's forex endpoint with an explicit timeout and a
//! bounded retry on network failures.

pub mod upbit;

pub use upbit::UpbitFeed;
