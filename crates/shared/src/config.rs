//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Exchange rate feed configuration.
    pub feed: FeedConfig,
    /// Token configuration.
    pub token: TokenConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Exchange rate feed configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Provider endpoint serving the most recent forex quotes.
    #[serde(default = "default_feed_url")]
    pub base_url: String,
    /// Outbound request timeout in seconds.
    #[serde(default = "default_feed_timeout")]
    pub timeout_secs: u64,
    /// Retries on network failure (parse failures are never retried).
    #[serde(default = "default_feed_retries")]
    pub max_retries: u32,
    /// Delay between retry attempts in milliseconds.
    #[serde(default = "default_feed_backoff")]
    pub retry_backoff_ms: u64,
}

fn default_feed_url() -> String {
    "https://crix-api-cdn.upbit.com/v1/forex/recent".to_string()
}

fn default_feed_timeout() -> u64 {
    5
}

fn default_feed_retries() -> u32 {
    2
}

fn default_feed_backoff() -> u64 {
    200
}

/// Token configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenConfig {
    /// Secret key for signing tokens. Must be exactly 64 bytes (512-bit HMAC).
    pub secret: String,
    /// Default token time-to-live in seconds.
    #[serde(default = "default_token_ttl")]
    pub ttl_secs: i64,
}

fn default_token_ttl() -> i64 {
    1800 // 30 minutes
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("REMIT").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
