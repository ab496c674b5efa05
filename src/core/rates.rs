use crate::core::currency::{CurrencyCode, CurrencyPair};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors arising from interest-rate and spot-rate lookups.
#[derive(Debug, Error)]
pub enum RateError {
    #[error("no interest rate available for {currency}")]
    RateUnavailable { currency: CurrencyCode },
    #[error("interest rate for {currency} must be finite, got {rate}")]
    InvalidRate { currency: CurrencyCode, rate: f64 },
    #[error("spot rate must be positive and finite, got {rate}")]
    InvalidSpot { rate: f64 },
}

/// Annualized interest rates per currency, as decimals (0.045 = 4.50%).
///
/// The table is owned and populated by the caller — typically from a
/// central-bank rate feed. There is no built-in default rate: a lookup
/// for an unknown currency fails with [`RateError::RateUnavailable`]
/// rather than silently substituting a guess, because a fabricated
/// rate would flow straight into P&L figures.
///
/// # Examples
///
/// ```
/// use hedge_engine::core::currency::CurrencyCode;
/// use hedge_engine::core::rates::InterestRateTable;
///
/// let mut rates = InterestRateTable::new();
/// rates.set_rate(CurrencyCode::new("USD"), 0.0450).unwrap();
/// rates.set_rate(CurrencyCode::new("INR"), 0.0550).unwrap();
///
/// assert_eq!(rates.rate(&CurrencyCode::new("USD")).unwrap(), 0.0450);
/// assert!(rates.rate(&CurrencyCode::new("BRL")).is_err());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterestRateTable {
    rates: HashMap<CurrencyCode, f64>,
}

impl InterestRateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the annualized rate for a currency.
    pub fn set_rate(&mut self, currency: CurrencyCode, rate: f64) -> Result<(), RateError> {
        if !rate.is_finite() {
            return Err(RateError::InvalidRate { currency, rate });
        }
        self.rates.insert(currency, rate);
        Ok(())
    }

    /// Get the annualized rate for a currency.
    pub fn rate(&self, currency: &CurrencyCode) -> Result<f64, RateError> {
        self.rates
            .get(currency)
            .copied()
            .ok_or_else(|| RateError::RateUnavailable {
                currency: currency.clone(),
            })
    }

    /// Get the (base, quote) rate pair needed to price a currency pair.
    pub fn pair_rates(&self, pair: &CurrencyPair) -> Result<(f64, f64), RateError> {
        Ok((self.rate(&pair.base)?, self.rate(&pair.quote)?))
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl FromIterator<(CurrencyCode, f64)> for InterestRateTable {
    fn from_iter<T: IntoIterator<Item = (CurrencyCode, f64)>>(iter: T) -> Self {
        Self {
            rates: iter.into_iter().collect(),
        }
    }
}

/// A live spot-rate observation for a currency pair on a given date.
///
/// The snapshot's `as_of` date doubles as the evaluation date for
/// P&L: everything the engine computes is a view "as of" this date,
/// rebuilt from scratch whenever a fresh snapshot arrives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateSnapshot {
    /// Units of quote currency per unit of base currency.
    pub spot_rate: f64,
    /// The date this observation applies to.
    pub as_of: NaiveDate,
}

impl RateSnapshot {
    /// Create a snapshot, rejecting non-positive or non-finite spots.
    pub fn new(spot_rate: f64, as_of: NaiveDate) -> Result<Self, RateError> {
        if !spot_rate.is_finite() || spot_rate <= 0.0 {
            return Err(RateError::InvalidSpot { rate: spot_rate });
        }
        Ok(Self { spot_rate, as_of })
    }
}
