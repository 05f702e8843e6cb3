//! Token minting utility for development and testing.
//!
//! Issues a signed bearer token from the configured signing key so protected
//! endpoints can be exercised without the authentication service.
//!
//! Usage: cargo run --bin tokengen -- <user-id> [id-type] [ttl-secs]

use chrono::Duration;

use remit_shared::{AppConfig, TokenService};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut args = std::env::args().skip(1);
    let Some(user_id) = args.next() else {
        eprintln!("usage: tokengen <user-id> [id-type] [ttl-secs]");
        std::process::exit(2);
    };
    let id_type = args.next().unwrap_or_else(|| "REG_NO".to_string());
    let ttl_secs = args.next().map(|s| s.parse::<i64>()).transpose()?;

    let config = AppConfig::load()?;
    let ttl = Duration::seconds(ttl_secs.unwrap_or(config.token.ttl_secs));

    let service = TokenService::new(&config.token)?;
    let token = service.issue(&user_id, &id_type, ttl)?;
    println!("{token}");

    Ok(())
}
