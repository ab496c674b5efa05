use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// ISO 4217-style currency code.
///
/// Supports standard fiat currencies (USD, EUR, INR, JPY, etc.)
/// as well as arbitrary identifiers for exotic or experimental
/// settlement units.
///
/// # Examples
///
/// ```
/// use hedge_engine::core::currency::CurrencyCode;
///
/// let usd = CurrencyCode::new("USD");
/// let inr = CurrencyCode::new("INR");
/// assert_ne!(usd, inr);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Errors arising from currency pair parsing.
#[derive(Debug, Error)]
pub enum PairParseError {
    #[error("currency pair must be of the form BASE/QUOTE, got {input}")]
    Malformed { input: String },
}

/// An ordered currency pair quoted as units of `quote` per unit of `base`.
///
/// By convention the base currency is the foreign leg and the quote
/// currency the domestic leg: for USD/INR at 85.54, one USD buys
/// 85.54 INR and P&L is denominated in INR.
///
/// # Examples
///
/// ```
/// use hedge_engine::core::currency::CurrencyPair;
///
/// let pair: CurrencyPair = "USD/INR".parse().unwrap();
/// assert_eq!(pair.base.as_str(), "USD");
/// assert_eq!(pair.quote.as_str(), "INR");
/// assert_eq!(pair.to_string(), "USD/INR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    /// Foreign currency.
    pub base: CurrencyCode,
    /// Domestic currency; P&L and mark-to-market are expressed in it.
    pub quote: CurrencyCode,
}

impl CurrencyPair {
    pub fn new(base: CurrencyCode, quote: CurrencyCode) -> Self {
        Self { base, quote }
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

impl FromStr for CurrencyPair {
    type Err = PairParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((base, quote)) if !base.is_empty() && !quote.is_empty() => Ok(Self::new(
                CurrencyCode::new(base.trim()),
                CurrencyCode::new(quote.trim()),
            )),
            _ => Err(PairParseError::Malformed {
                input: s.to_string(),
            }),
        }
    }
}
