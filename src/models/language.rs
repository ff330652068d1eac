//! Display languages
//!
//! The active language is always passed explicitly to label lookups and the
//! report formatter; nothing in the library holds a "current" language.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ru,
}

impl Language {
    pub const ALL: [Language; 2] = [Self::En, Self::Ru];

    /// Two-letter language code
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }

    /// The language's own name, as shown in a language picker
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ru => "Русский",
        }
    }

    /// strftime pattern for rendering a transaction timestamp
    pub fn timestamp_format(&self) -> &'static str {
        match self {
            Self::En => "%-m/%-d/%Y, %-I:%M:%S %p",
            Self::Ru => "%d.%m.%Y, %H:%M:%S",
        }
    }

    /// Parse a language from its code (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|l| l.code() == s)
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::Ru
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unsupported language: {}", s))
    }
}
