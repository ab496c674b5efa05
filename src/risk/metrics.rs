use crate::pnl::engine::DailyPnlEntry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete risk classification for a contract's P&L profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskRating {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for RiskRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskRating::Low => "Low",
            RiskRating::Medium => "Medium",
            RiskRating::High => "High",
            RiskRating::Critical => "Critical",
        };
        write!(f, "{}", s)
    }
}

/// Classification thresholds, in quote-currency units.
///
/// Absolute thresholds only make sense relative to notional size and
/// currency, so they are caller-supplied configuration rather than
/// constants baked into the classifier. The defaults suit INR-quoted
/// contracts around a few hundred thousand units of notional.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub volatility_medium: f64,
    pub volatility_high: f64,
    pub volatility_critical: f64,
    pub var_medium: f64,
    pub var_high: f64,
    pub var_critical: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            volatility_medium: 10_000.0,
            volatility_high: 25_000.0,
            volatility_critical: 50_000.0,
            var_medium: 25_000.0,
            var_high: 50_000.0,
            var_critical: 100_000.0,
        }
    }
}

/// Aggregated risk metrics over one daily P&L series.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// Lowest cumulative P&L seen over the series; never above zero.
    pub max_drawdown: f64,
    /// Highest cumulative P&L seen over the series; never below zero.
    pub max_profit: f64,
    /// Magnitude of the 5th-percentile daily P&L (historical,
    /// nearest-rank).
    pub value_at_risk: f64,
    /// Population standard deviation of daily P&L.
    pub volatility_score: f64,
    pub risk_rating: RiskRating,
}

impl RiskMetrics {
    /// Aggregate a daily P&L series into risk metrics.
    ///
    /// An empty series yields all-zero metrics and a `Low` rating.
    pub fn aggregate(series: &[DailyPnlEntry], thresholds: &RiskThresholds) -> Self {
        if series.is_empty() {
            return Self {
                max_drawdown: 0.0,
                max_profit: 0.0,
                value_at_risk: 0.0,
                volatility_score: 0.0,
                risk_rating: RiskRating::Low,
            };
        }

        let mut max_drawdown = 0.0f64;
        let mut max_profit = 0.0f64;
        for entry in series {
            max_drawdown = max_drawdown.min(entry.cumulative_pnl);
            max_profit = max_profit.max(entry.cumulative_pnl);
        }

        let daily: Vec<f64> = series.iter().map(|e| e.daily_pnl).collect();
        let volatility_score = population_std_dev(&daily);
        let value_at_risk = historical_var(&daily);

        let risk_rating = classify(volatility_score, value_at_risk, thresholds);

        Self {
            max_drawdown,
            max_profit,
            value_at_risk,
            volatility_score,
            risk_rating,
        }
    }
}

impl fmt::Display for RiskMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Risk Metrics ===")?;
        writeln!(f, "Max Drawdown:   {:.2}", self.max_drawdown)?;
        writeln!(f, "Max Profit:     {:.2}", self.max_profit)?;
        writeln!(f, "Value at Risk:  {:.2}", self.value_at_risk)?;
        writeln!(f, "Volatility:     {:.2}", self.volatility_score)?;
        writeln!(f, "Rating:         {}", self.risk_rating)?;
        Ok(())
    }
}

fn population_std_dev(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

/// 95% historical VaR by the nearest-rank method.
fn historical_var(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let index = (sorted.len() as f64 * 0.05).floor() as usize;
    sorted[index.min(sorted.len() - 1)].abs()
}

fn classify(volatility: f64, var: f64, t: &RiskThresholds) -> RiskRating {
    if volatility > t.volatility_critical || var > t.var_critical {
        RiskRating::Critical
    } else if volatility > t.volatility_high || var > t.var_high {
        RiskRating::High
    } else if volatility > t.volatility_medium || var > t.var_medium {
        RiskRating::Medium
    } else {
        RiskRating::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn entry(day_index: usize, daily_pnl: f64, cumulative_pnl: f64) -> DailyPnlEntry {
        DailyPnlEntry {
            date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
                + chrono::Duration::days(day_index as i64),
            day_index,
            days_to_maturity: 85 - day_index as i64,
            forward_rate: 85.15,
            budgeted_forward_rate: 85.14,
            daily_pnl,
            cumulative_pnl,
            mark_to_market: cumulative_pnl,
        }
    }

    fn series_from_daily(daily: &[f64]) -> Vec<DailyPnlEntry> {
        let mut cumulative = 0.0;
        daily
            .iter()
            .enumerate()
            .map(|(i, &pnl)| {
                cumulative += pnl;
                entry(i, pnl, cumulative)
            })
            .collect()
    }

    #[test]
    fn test_empty_series_is_low_risk() {
        let metrics = RiskMetrics::aggregate(&[], &RiskThresholds::default());
        assert_eq!(metrics.max_drawdown, 0.0);
        assert_eq!(metrics.max_profit, 0.0);
        assert_eq!(metrics.value_at_risk, 0.0);
        assert_eq!(metrics.volatility_score, 0.0);
        assert_eq!(metrics.risk_rating, RiskRating::Low);
    }

    #[test]
    fn test_drawdown_and_profit_bounds() {
        let series = series_from_daily(&[0.0, 500.0, -2_000.0, 3_000.0]);
        let metrics = RiskMetrics::aggregate(&series, &RiskThresholds::default());
        // Cumulative path: 0, 500, -1500, 1500
        assert_eq!(metrics.max_drawdown, -1_500.0);
        assert_eq!(metrics.max_profit, 1_500.0);
    }

    #[test]
    fn test_all_positive_series_has_zero_drawdown() {
        let series = series_from_daily(&[0.0, 100.0, 200.0]);
        let metrics = RiskMetrics::aggregate(&series, &RiskThresholds::default());
        assert_eq!(metrics.max_drawdown, 0.0);
        assert_eq!(metrics.max_profit, 300.0);
    }

    #[test]
    fn test_population_std_dev() {
        // Daily P&L 2, 4, 4, 4, 5, 5, 7, 9: population σ = 2.
        let series = series_from_daily(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        let metrics = RiskMetrics::aggregate(&series, &RiskThresholds::default());
        assert_relative_eq!(metrics.volatility_score, 2.0, max_relative = 1e-12);
    }

    #[test]
    fn test_constant_series_has_zero_volatility() {
        let series = series_from_daily(&[100.0; 30]);
        let metrics = RiskMetrics::aggregate(&series, &RiskThresholds::default());
        assert_relative_eq!(metrics.volatility_score, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_var_nearest_rank() {
        // 20 values: floor(20 × 0.05) = index 1 of the sorted list.
        let mut daily = vec![-9_000.0, -5_000.0];
        daily.extend(std::iter::repeat(100.0).take(18));
        let series = series_from_daily(&daily);
        let metrics = RiskMetrics::aggregate(&series, &RiskThresholds::default());
        assert_eq!(metrics.value_at_risk, 5_000.0);
    }

    #[test]
    fn test_var_single_entry() {
        let series = series_from_daily(&[-750.0]);
        let metrics = RiskMetrics::aggregate(&series, &RiskThresholds::default());
        assert_eq!(metrics.value_at_risk, 750.0);
    }

    #[test]
    fn test_rating_thresholds() {
        let t = RiskThresholds::default();
        assert_eq!(classify(5_000.0, 10_000.0, &t), RiskRating::Low);
        assert_eq!(classify(15_000.0, 10_000.0, &t), RiskRating::Medium);
        assert_eq!(classify(5_000.0, 30_000.0, &t), RiskRating::Medium);
        assert_eq!(classify(30_000.0, 10_000.0, &t), RiskRating::High);
        assert_eq!(classify(5_000.0, 60_000.0, &t), RiskRating::High);
        assert_eq!(classify(60_000.0, 0.0, &t), RiskRating::Critical);
        assert_eq!(classify(0.0, 150_000.0, &t), RiskRating::Critical);
    }

    #[test]
    fn test_custom_thresholds_rescale_rating() {
        // Same series, tighter thresholds: rating escalates.
        let series = series_from_daily(&[0.0, 2_000.0, -2_000.0, 1_500.0]);
        let default = RiskMetrics::aggregate(&series, &RiskThresholds::default());
        assert_eq!(default.risk_rating, RiskRating::Low);

        let tight = RiskThresholds {
            volatility_medium: 100.0,
            volatility_high: 500.0,
            volatility_critical: 1_000.0,
            var_medium: 100.0,
            var_high: 500.0,
            var_critical: 1_000.0,
        };
        let rescored = RiskMetrics::aggregate(&series, &tight);
        assert_eq!(rescored.risk_rating, RiskRating::Critical);
    }
}
