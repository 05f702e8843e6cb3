//! Shared types, errors, and configuration for Remit.
//!
//! This crate provides common types used across all other crates:
//! - Token claims and the HMAC-SHA512 token service
//! - Supported remittance currencies
//! - Application-wide error taxonomy
//! - Configuration management

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;
pub mod types;

pub use auth::Claims;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use jwt::{TokenError, TokenService};
pub use types::Currency;
