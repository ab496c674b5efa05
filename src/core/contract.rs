use crate::core::currency::CurrencyPair;
use crate::core::rates::{InterestRateTable, RateError, RateSnapshot};
use crate::curve::forward::{forward_rate, CalculationError};
use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors arising from contract creation.
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("maturity {maturity} must be after inception {inception}")]
    InvalidTenor {
        inception: NaiveDate,
        maturity: NaiveDate,
    },
    #[error("notional must be positive, got {amount}")]
    InvalidNotional { amount: Decimal },
    #[error(transparent)]
    Rate(#[from] RateError),
    #[error(transparent)]
    Calculation(#[from] CalculationError),
}

/// Hedge direction, determining the P&L sign convention.
///
/// An exporter (long the base currency) profits when the forward rate
/// rises above the budgeted rate; an importer (short) profits when it
/// falls below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Export,
    Import,
    Forward,
    Spot,
    Swap,
    Option,
}

impl Direction {
    /// P&L multiplier: +1 for long positions, −1 for import (short).
    pub fn sign(self) -> f64 {
        match self {
            Direction::Import => -1.0,
            _ => 1.0,
        }
    }
}

/// Caller-supplied terms for opening a contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractTerms {
    pub pair: CurrencyPair,
    /// Notional in base-currency units. Must be positive.
    pub amount: Decimal,
    pub direction: Direction,
    pub inception: NaiveDate,
    pub maturity: NaiveDate,
}

/// An FX hedge contract with its budgeted forward rate frozen at inception.
///
/// The budgeted rate is the contract's single benchmark: it is computed
/// exactly once inside [`Contract::open`], from the inception spot and
/// the full tenor, and can never be rewritten afterwards — the field is
/// private and no mutator exists. Recomputing it from a later spot
/// would silently re-baseline every mark-to-market figure, which is
/// why immutability here is enforced by construction rather than by
/// convention.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hedge_engine::core::contract::{Contract, ContractTerms, Direction};
/// use hedge_engine::core::currency::CurrencyCode;
/// use hedge_engine::core::rates::{InterestRateTable, RateSnapshot};
/// use rust_decimal_macros::dec;
///
/// let mut rates = InterestRateTable::new();
/// rates.set_rate(CurrencyCode::new("USD"), 0.0450).unwrap();
/// rates.set_rate(CurrencyCode::new("INR"), 0.0650).unwrap();
///
/// let inception = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
/// let terms = ContractTerms {
///     pair: "USD/INR".parse().unwrap(),
///     amount: dec!(500_000),
///     direction: Direction::Export,
///     inception,
///     maturity: NaiveDate::from_ymd_opt(2025, 9, 24).unwrap(),
/// };
/// let snapshot = RateSnapshot::new(85.5400, inception).unwrap();
///
/// let contract = Contract::open(terms, &snapshot, &rates).unwrap();
/// assert!((contract.budgeted_forward_rate() - 85.1425).abs() < 0.001);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    id: Uuid,
    pair: CurrencyPair,
    amount: Decimal,
    direction: Direction,
    inception: NaiveDate,
    maturity: NaiveDate,
    /// Spot rate observed at inception, kept for audit.
    inception_spot: f64,
    /// Frozen at inception; see the type-level docs.
    budgeted_forward_rate: f64,
}

impl Contract {
    /// Open a contract, freezing its budgeted forward rate.
    ///
    /// The snapshot must be the live observation at inception. If any
    /// required rate is missing the contract is not created at all:
    /// there is no fallback to a synthesized budgeted rate.
    pub fn open(
        terms: ContractTerms,
        snapshot: &RateSnapshot,
        rates: &InterestRateTable,
    ) -> Result<Self, ContractError> {
        Self::open_with_id(Uuid::new_v4(), terms, snapshot, rates)
    }

    /// Open a contract with a specific ID (useful for testing / determinism).
    pub fn open_with_id(
        id: Uuid,
        terms: ContractTerms,
        snapshot: &RateSnapshot,
        rates: &InterestRateTable,
    ) -> Result<Self, ContractError> {
        if terms.amount <= Decimal::ZERO {
            return Err(ContractError::InvalidNotional {
                amount: terms.amount,
            });
        }
        if terms.maturity <= terms.inception {
            return Err(ContractError::InvalidTenor {
                inception: terms.inception,
                maturity: terms.maturity,
            });
        }

        let tenor_days = (terms.maturity - terms.inception).num_days();
        let (base_rate, quote_rate) = rates.pair_rates(&terms.pair)?;
        let budgeted = forward_rate(snapshot.spot_rate, base_rate, quote_rate, tenor_days)?;

        Ok(Self {
            id,
            pair: terms.pair,
            amount: terms.amount,
            direction: terms.direction,
            inception: terms.inception,
            maturity: terms.maturity,
            inception_spot: snapshot.spot_rate,
            budgeted_forward_rate: budgeted,
        })
    }

    // --- Accessors ---

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn pair(&self) -> &CurrencyPair {
        &self.pair
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Notional as a float for rate arithmetic.
    pub fn notional(&self) -> Result<f64, CalculationError> {
        self.amount
            .to_f64()
            .filter(|n| n.is_finite())
            .ok_or(CalculationError::NonFinite {
                what: "notional",
                value: f64::NAN,
            })
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn inception(&self) -> NaiveDate {
        self.inception
    }

    pub fn maturity(&self) -> NaiveDate {
        self.maturity
    }

    pub fn inception_spot(&self) -> f64 {
        self.inception_spot
    }

    /// The frozen benchmark rate. There is deliberately no setter.
    pub fn budgeted_forward_rate(&self) -> f64 {
        self.budgeted_forward_rate
    }

    /// Full contract tenor in calendar days.
    pub fn tenor_days(&self) -> i64 {
        (self.maturity - self.inception).num_days()
    }

    /// Calendar days from `as_of` to maturity. Zero or negative once matured.
    pub fn remaining_days(&self, as_of: NaiveDate) -> i64 {
        (self.maturity - as_of).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::currency::CurrencyCode;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn usd_inr_rates() -> InterestRateTable {
        let mut rates = InterestRateTable::new();
        rates.set_rate(CurrencyCode::new("USD"), 0.0450).unwrap();
        rates.set_rate(CurrencyCode::new("INR"), 0.0650).unwrap();
        rates
    }

    fn sample_terms() -> ContractTerms {
        ContractTerms {
            pair: "USD/INR".parse().unwrap(),
            amount: dec!(500_000),
            direction: Direction::Export,
            inception: date(2025, 7, 1),
            maturity: date(2025, 9, 24),
        }
    }

    #[test]
    fn test_open_freezes_budgeted_rate() {
        let rates = usd_inr_rates();
        let snapshot = RateSnapshot::new(85.5400, date(2025, 7, 1)).unwrap();
        let contract = Contract::open(sample_terms(), &snapshot, &rates).unwrap();

        assert_eq!(contract.tenor_days(), 85);
        let expected = 85.5400 * (-0.02f64 * 85.0 / 365.0).exp();
        assert_relative_eq!(
            contract.budgeted_forward_rate(),
            expected,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            contract.budgeted_forward_rate(),
            85.1425,
            max_relative = 1e-5
        );
    }

    #[test]
    fn test_open_rejects_zero_notional() {
        let rates = usd_inr_rates();
        let snapshot = RateSnapshot::new(85.54, date(2025, 7, 1)).unwrap();
        let mut terms = sample_terms();
        terms.amount = Decimal::ZERO;
        let err = Contract::open(terms, &snapshot, &rates).unwrap_err();
        assert!(matches!(err, ContractError::InvalidNotional { .. }));
    }

    #[test]
    fn test_open_rejects_negative_notional() {
        let rates = usd_inr_rates();
        let snapshot = RateSnapshot::new(85.54, date(2025, 7, 1)).unwrap();
        let mut terms = sample_terms();
        terms.amount = dec!(-100);
        assert!(Contract::open(terms, &snapshot, &rates).is_err());
    }

    #[test]
    fn test_open_rejects_inverted_tenor() {
        let rates = usd_inr_rates();
        let snapshot = RateSnapshot::new(85.54, date(2025, 7, 1)).unwrap();
        let mut terms = sample_terms();
        terms.maturity = terms.inception;
        let err = Contract::open(terms, &snapshot, &rates).unwrap_err();
        assert!(matches!(err, ContractError::InvalidTenor { .. }));
    }

    #[test]
    fn test_open_fails_without_rates() {
        // No fallback to fake data: creation must fail outright.
        let rates = InterestRateTable::new();
        let snapshot = RateSnapshot::new(85.54, date(2025, 7, 1)).unwrap();
        let err = Contract::open(sample_terms(), &snapshot, &rates).unwrap_err();
        assert!(matches!(
            err,
            ContractError::Rate(RateError::RateUnavailable { .. })
        ));
    }

    #[test]
    fn test_remaining_days() {
        let rates = usd_inr_rates();
        let snapshot = RateSnapshot::new(85.54, date(2025, 7, 1)).unwrap();
        let contract = Contract::open(sample_terms(), &snapshot, &rates).unwrap();

        assert_eq!(contract.remaining_days(date(2025, 7, 1)), 85);
        assert_eq!(contract.remaining_days(date(2025, 7, 2)), 84);
        assert_eq!(contract.remaining_days(date(2025, 9, 24)), 0);
        assert_eq!(contract.remaining_days(date(2025, 10, 1)), -7);
    }

    #[test]
    fn test_direction_signs() {
        assert_eq!(Direction::Export.sign(), 1.0);
        assert_eq!(Direction::Forward.sign(), 1.0);
        assert_eq!(Direction::Import.sign(), -1.0);
    }

    #[test]
    fn test_contract_json_round_trip() {
        let rates = usd_inr_rates();
        let snapshot = RateSnapshot::new(85.54, date(2025, 7, 1)).unwrap();
        let contract = Contract::open(sample_terms(), &snapshot, &rates).unwrap();

        let json = serde_json::to_string(&contract).unwrap();
        let restored: Contract = serde_json::from_str(&json).unwrap();
        assert_eq!(
            restored.budgeted_forward_rate(),
            contract.budgeted_forward_rate()
        );
        assert_eq!(restored.amount(), contract.amount());
        assert_eq!(restored.id(), contract.id());
    }
}
