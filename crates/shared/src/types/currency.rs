//! Supported remittance target currencies.

use serde::{Deserialize, Serialize};

/// ISO 4217 codes of currencies the service can quote against KRW.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar
    Usd,
    /// Japanese Yen
    Jpy,
}

impl Currency {
    /// Decimal places used when rendering amounts in this currency.
    ///
    /// JPY has no minor unit in typical quoting.
    #[must_use]
    pub const fn decimal_places(self) -> u32 {
        match self {
            Self::Usd => 2,
            Self::Jpy => 0,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usd => write!(f, "USD"),
            Self::Jpy => write!(f, "JPY"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "JPY" => Ok(Self::Jpy),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}
