//! Supported currencies
//!
//! A currency is a display tag only. Amounts are never converted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported currency, identified by its ISO 4217 code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Azn,
    Usd,
    Eur,
    Ils,
    Rub,
}

impl Currency {
    /// Every supported currency, in picker order
    pub const ALL: [Currency; 5] = [Self::Azn, Self::Usd, Self::Eur, Self::Ils, Self::Rub];

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Azn => "AZN",
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Ils => "ILS",
            Self::Rub => "RUB",
        }
    }

    /// Parse a currency from its code (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_uppercase();
        Self::ALL.into_iter().find(|c| c.code() == s)
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::Azn
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| s.to_string())
    }
}
