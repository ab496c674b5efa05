//! Random contract portfolios for stress testing.
//!
//! Generates randomized hedge contracts to exercise the P&L engine
//! under volume. Randomness here is confined to portfolio composition
//! (pairs, notionals, tenors, inception spots) — future spot rates are
//! never simulated; projected forwards always come from the curve.

use crate::core::contract::{Contract, ContractError, ContractTerms, Direction};
use crate::core::currency::{CurrencyCode, CurrencyPair};
use crate::core::rates::{InterestRateTable, RateSnapshot};
use chrono::{Duration, NaiveDate};
use rand::Rng;
use rust_decimal::Decimal;

/// Configuration for generating a random contract portfolio.
#[derive(Debug, Clone)]
pub struct PortfolioConfig {
    /// Number of contracts to generate.
    pub contract_count: usize,
    /// Markets to draw from: (pair, nominal spot). Generated inception
    /// spots jitter within ±2% of the nominal.
    pub markets: Vec<(CurrencyPair, f64)>,
    /// Minimum notional, in base-currency units.
    pub min_notional: Decimal,
    /// Maximum notional.
    pub max_notional: Decimal,
    /// Minimum contract tenor in days.
    pub min_tenor_days: i64,
    /// Maximum contract tenor in days.
    pub max_tenor_days: i64,
    /// Inception date for every generated contract.
    pub as_of: NaiveDate,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            contract_count: 10,
            markets: vec![("USD/INR".parse().expect("valid pair"), 85.54)],
            min_notional: Decimal::from(100_000),
            max_notional: Decimal::from(5_000_000),
            min_tenor_days: 30,
            max_tenor_days: 365,
            as_of: NaiveDate::from_ymd_opt(2025, 7, 1).expect("valid date"),
        }
    }
}

/// Central-bank policy rates as of July 2025, for demos and benchmarks.
///
/// The core never consults this table implicitly; it exists so that
/// callers (CLI, benches) have a consistent starting point to inject.
pub fn reference_rates() -> InterestRateTable {
    [
        ("USD", 0.0450),
        ("EUR", 0.0215),
        ("GBP", 0.0425),
        ("JPY", 0.0050),
        ("AUD", 0.0435),
        ("CAD", 0.0475),
        ("CHF", 0.0175),
        ("CNY", 0.0320),
        ("INR", 0.0550),
    ]
    .into_iter()
    .map(|(code, rate)| (CurrencyCode::new(code), rate))
    .collect()
}

/// Generate a random portfolio of hedge contracts.
///
/// Fails if the rate table is missing a currency used by the
/// configured markets — same rule as ordinary contract creation.
pub fn generate_random_portfolio(
    config: &PortfolioConfig,
    rates: &InterestRateTable,
) -> Result<Vec<Contract>, ContractError> {
    let mut rng = rand::thread_rng();
    let mut contracts = Vec::with_capacity(config.contract_count);

    let directions = [Direction::Export, Direction::Import, Direction::Forward];

    let min_notional: f64 = config.min_notional.to_string().parse().unwrap_or(100_000.0);
    let max_notional: f64 = config
        .max_notional
        .to_string()
        .parse()
        .unwrap_or(5_000_000.0);

    for _ in 0..config.contract_count {
        let (pair, nominal_spot) = &config.markets[rng.gen_range(0..config.markets.len())];

        let spot = nominal_spot * rng.gen_range(0.98..1.02);
        let tenor = rng.gen_range(config.min_tenor_days..=config.max_tenor_days);
        let notional = Decimal::from_f64_retain(rng.gen_range(min_notional..max_notional))
            .unwrap_or(Decimal::from(100_000))
            .round_dp(2);
        let direction = directions[rng.gen_range(0..directions.len())];

        let terms = ContractTerms {
            pair: pair.clone(),
            amount: notional,
            direction,
            inception: config.as_of,
            maturity: config.as_of + Duration::days(tenor),
        };
        let snapshot = RateSnapshot::new(spot, config.as_of)?;
        contracts.push(Contract::open(terms, &snapshot, rates)?);
    }

    Ok(contracts)
}
