//! # hedge-engine
//!
//! Open FX forward curve and daily P&L attribution engine.
//!
//! Given an FX hedge contract (forward, export, import, spot, swap,
//! option) and a live spot rate, this engine prices the forward curve
//! via Interest Rate Parity, freezes the contract's budgeted forward
//! rate at inception, and attributes daily profit-and-loss against it.
//!
//! ## Architecture
//!
//! - **core** — Foundational types: currencies, interest rates, contracts
//! - **curve** — IRP forward pricing and the interpolated forward curve
//! - **pnl** — Daily P&L attribution and mark-to-market
//! - **risk** — Drawdown, VaR, volatility and risk rating
//! - **simulation** — Random contract portfolios for stress testing

pub mod core;
pub mod curve;
pub mod pnl;
pub mod risk;
pub mod simulation;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::contract::{Contract, ContractTerms, Direction};
    pub use crate::core::currency::{CurrencyCode, CurrencyPair};
    pub use crate::core::rates::{InterestRateTable, RateSnapshot};
    pub use crate::curve::builder::ForwardCurve;
    pub use crate::pnl::engine::{DailyPnlEntry, PnlEngine};
    pub use crate::risk::metrics::{RiskMetrics, RiskRating, RiskThresholds};
}
