//! Risk aggregation over daily P&L series: drawdown, VaR, volatility.

pub mod metrics;
