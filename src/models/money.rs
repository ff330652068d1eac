//! Money type for representing transaction amounts
//!
//! Internally stores amounts in minor units (hundredths, i64) to avoid
//! floating-point drift. Currency is a separate display tag; no conversion
//! is ever applied to an amount.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A monetary amount stored as hundredths of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use money_report::models::Money;
    /// let amount = Money::from_cents(550); // 5.5
    /// assert_eq!(amount.to_string(), "5.5");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the fractional portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Convert a floating point amount, rounding to the nearest hundredth
    pub fn from_f64(value: f64) -> Result<Self, MoneyParseError> {
        let scaled = (value * 100.0).round();
        if !scaled.is_finite() || scaled > i64::MAX as f64 || scaled < i64::MIN as f64 {
            return Err(MoneyParseError::InvalidFormat(value.to_string()));
        }
        Ok(Self(scaled as i64))
    }

    /// Parse a money amount from user input
    ///
    /// Accepts "10.50", "10,50", "-10.5", "10", ".5". Like `from_f64`, the
    /// result is rounded half away from zero to the nearest hundredth.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());
        let trimmed = s.trim();

        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (whole, fraction) = match body.find(['.', ',']) {
            Some(pos) => (&body[..pos], &body[pos + 1..]),
            None => (body, ""),
        };

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(invalid());
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        // Pad the fraction to 2 digits; the third digit decides rounding
        let cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction[..2].parse().map_err(|_| invalid())?,
        };
        let round_up = fraction.as_bytes().get(2).is_some_and(|d| *d >= b'5');

        let total = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents + i64::from(round_up)))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -total } else { total }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

/// Shortest rendering: no trailing zeros, no decimal point for whole amounts
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let units = self.units().abs();
        let cents = self.cents_part();
        match cents {
            0 => write!(f, "{}{}", sign, units),
            c if c % 10 == 0 => write!(f, "{}{}.{}", sign, units, c / 10),
            c => write!(f, "{}{}.{:02}", sign, units, c),
        }
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(550)), "5.5");
        assert_eq!(format!("{}", Money::from_cents(1200)), "12");
        assert_eq!(format!("{}", Money::from_cents(5)), "0.05");
        assert_eq!(format!("{}", Money::from_cents(1999)), "19.99");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.5");
        assert_eq!(format!("{}", Money::zero()), "0");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("10,50").unwrap().cents(), 1050);
        assert_eq!(Money::parse(" 10 ").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse("1.994").unwrap().cents(), 199);
        assert_eq!(Money::parse("-3").unwrap().cents(), -300);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", " ", "abc", "1.2.3", "1e3", "$5", ".", "5-"] {
            assert!(Money::parse(input).is_err(), "accepted {:?}", input);
        }
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(Money::from_f64(5.5).unwrap().cents(), 550);
        assert_eq!(Money::from_f64(0.1 + 0.2).unwrap().cents(), 30);
        assert!(Money::from_f64(f64::NAN).is_err());
        assert!(Money::from_f64(f64::INFINITY).is_err());
    }

    #[test]
    fn test_text_and_number_round_alike() {
        for (text, value, cents) in [
            ("1.999", 1.999, 200),
            ("1.994", 1.994, 199),
            ("0.005", 0.005, 1),
            ("0.004", 0.004, 0),
            ("0.125", 0.125, 13),
            ("-1.999", -1.999, -200),
        ] {
            assert_eq!(Money::parse(text).unwrap().cents(), cents, "{}", text);
            assert_eq!(Money::from_f64(value).unwrap().cents(), cents, "{}", value);
        }
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");
    }
}
