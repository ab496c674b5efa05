use crate::core::contract::Contract;
use crate::core::rates::{InterestRateTable, RateSnapshot};
use crate::curve::builder::{CurveError, ForwardCurve};
use crate::curve::forward::CalculationError;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors arising from P&L attribution.
#[derive(Debug, Error)]
pub enum PnlError {
    /// The contract is at or past maturity — the caller decides whether
    /// to mark it closed; this is a signal, not a crash.
    #[error("contract matured on {maturity}, cannot evaluate as of {as_of}")]
    ContractMatured {
        maturity: NaiveDate,
        as_of: NaiveDate,
    },
    #[error(transparent)]
    Curve(#[from] CurveError),
    #[error(transparent)]
    Calculation(#[from] CalculationError),
}

/// One day of P&L attribution.
///
/// Money fields (`daily_pnl`, `cumulative_pnl`, `mark_to_market`) are
/// denominated in the contract's quote currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyPnlEntry {
    pub date: NaiveDate,
    /// Position in the series, starting at 0 on the evaluation date.
    pub day_index: usize,
    pub days_to_maturity: i64,
    /// Curve-implied forward rate for this day's remaining tenor.
    pub forward_rate: f64,
    /// Copy of the contract's frozen benchmark, for display and audit.
    pub budgeted_forward_rate: f64,
    /// Day-over-day change in the forward, in notional terms. Zero by
    /// definition on the first entry of any series.
    pub daily_pnl: f64,
    pub cumulative_pnl: f64,
    /// `(forward − budgeted) × notional × direction sign`.
    pub mark_to_market: f64,
}

/// The daily P&L attribution engine.
///
/// All computation is pure and synchronous: each call reads one
/// contract and one rate snapshot and emits a fresh series. Outputs
/// are derived views — nothing here is meant to be persisted back
/// onto the contract.
pub struct PnlEngine;

impl PnlEngine {
    /// Attribute P&L over the remaining life of a contract.
    ///
    /// Builds one forward curve from the snapshot's live spot, then
    /// walks every day from the evaluation date to maturity, pricing
    /// each day's remaining tenor off that single curve. Days beyond
    /// the evaluation date carry curve-implied forwards, never an
    /// independently simulated spot path.
    ///
    /// The first entry's `daily_pnl` is exactly zero: there is no
    /// prior forward to diff against, so the first day's forward is
    /// by definition the reference point.
    pub fn daily_series(
        contract: &Contract,
        snapshot: &RateSnapshot,
        rates: &InterestRateTable,
    ) -> Result<Vec<DailyPnlEntry>, PnlError> {
        let remaining = contract.remaining_days(snapshot.as_of);
        if remaining <= 0 {
            return Err(PnlError::ContractMatured {
                maturity: contract.maturity(),
                as_of: snapshot.as_of,
            });
        }

        let notional = contract.notional()?;
        let sign = contract.direction().sign();
        let budgeted = contract.budgeted_forward_rate();
        let curve = ForwardCurve::build(snapshot.spot_rate, contract.pair(), rates, remaining)?;

        let mut entries = Vec::with_capacity(remaining as usize);
        let mut cumulative = 0.0;
        let mut previous: Option<f64> = None;

        for day in 0..remaining {
            let days_to_maturity = remaining - day;
            let forward = curve.interpolate(days_to_maturity);

            let daily = match previous {
                None => 0.0,
                Some(prev) => checked("daily pnl", (forward - prev) * notional * sign)?,
            };
            cumulative += daily;
            let mark_to_market = checked("mark-to-market", (forward - budgeted) * notional * sign)?;

            entries.push(DailyPnlEntry {
                date: snapshot.as_of + Duration::days(day),
                day_index: day as usize,
                days_to_maturity,
                forward_rate: forward,
                budgeted_forward_rate: budgeted,
                daily_pnl: daily,
                cumulative_pnl: cumulative,
                mark_to_market,
            });
            previous = Some(forward);
        }

        log::debug!(
            "daily series for {}: {} entries, cumulative {:.2} {}",
            contract.id(),
            entries.len(),
            cumulative,
            contract.pair().quote
        );

        Ok(entries)
    }

    /// Replay recorded spot observations from inception up to today.
    ///
    /// Each snapshot gets its own curve, built from that day's actual
    /// spot; observations on or after maturity are skipped. The same
    /// first-entry-zero rule applies: the earliest replayed forward is
    /// the reference point.
    pub fn historical_series(
        contract: &Contract,
        snapshots: &[RateSnapshot],
        rates: &InterestRateTable,
    ) -> Result<Vec<DailyPnlEntry>, PnlError> {
        let mut observations = snapshots.to_vec();
        observations.sort_by_key(|s| s.as_of);

        let notional = contract.notional()?;
        let sign = contract.direction().sign();
        let budgeted = contract.budgeted_forward_rate();

        let mut entries = Vec::new();
        let mut cumulative = 0.0;
        let mut previous: Option<f64> = None;

        for observation in observations {
            let days_to_maturity = contract.remaining_days(observation.as_of);
            if days_to_maturity <= 0 {
                continue;
            }

            let curve =
                ForwardCurve::build(observation.spot_rate, contract.pair(), rates, days_to_maturity)?;
            let forward = curve.interpolate(days_to_maturity);

            let daily = match previous {
                None => 0.0,
                Some(prev) => checked("daily pnl", (forward - prev) * notional * sign)?,
            };
            cumulative += daily;
            let mark_to_market = checked("mark-to-market", (forward - budgeted) * notional * sign)?;

            entries.push(DailyPnlEntry {
                date: observation.as_of,
                day_index: entries.len(),
                days_to_maturity,
                forward_rate: forward,
                budgeted_forward_rate: budgeted,
                daily_pnl: daily,
                cumulative_pnl: cumulative,
                mark_to_market,
            });
            previous = Some(forward);
        }

        Ok(entries)
    }
}

fn checked(what: &'static str, value: f64) -> Result<f64, CalculationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalculationError::NonFinite { what, value })
    }
}
