use thiserror::Error;

/// Day-count basis used throughout the engine (actual/365).
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Arithmetic domain errors from pricing calculations.
///
/// A NaN or infinity must never flow through into a displayed P&L
/// amount, so every pricing function checks its inputs and output.
#[derive(Debug, Error)]
pub enum CalculationError {
    #[error("calculation produced a non-finite {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

fn require_finite(what: &'static str, value: f64) -> Result<f64, CalculationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalculationError::NonFinite { what, value })
    }
}

/// Theoretical forward rate via continuously compounded Interest Rate Parity.
///
/// `F = S × exp((r_base − r_quote) × t)` where `t = days / 365`,
/// `r_base` is the foreign (base) currency's annualized rate and
/// `r_quote` the domestic (quote) currency's. Rates are decimals
/// (0.045 = 4.50%). Pure and deterministic; unknown rates are the
/// caller's problem — this function never substitutes a default.
///
/// # Examples
///
/// ```
/// use hedge_engine::curve::forward::forward_rate;
///
/// // USD/INR: USD at 4.50%, INR at 6.50%, 85 days out
/// let fwd = forward_rate(85.5400, 0.0450, 0.0650, 85).unwrap();
/// assert!((fwd - 85.1425).abs() < 0.001);
/// ```
pub fn forward_rate(
    spot: f64,
    base_rate: f64,
    quote_rate: f64,
    days_to_maturity: i64,
) -> Result<f64, CalculationError> {
    require_finite("spot", spot)?;
    require_finite("base rate", base_rate)?;
    require_finite("quote rate", quote_rate)?;

    let t = days_to_maturity as f64 / DAYS_PER_YEAR;
    let forward = spot * ((base_rate - quote_rate) * t).exp();
    require_finite("forward rate", forward)
}
