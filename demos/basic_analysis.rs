//! Basic forward-curve and P&L attribution example.
//!
//! Walks one USD/INR export hedge through contract creation, curve
//! construction, the daily P&L series, and risk aggregation.

use chrono::NaiveDate;
use hedge_engine::core::contract::{Contract, ContractTerms, Direction};
use hedge_engine::core::rates::RateSnapshot;
use hedge_engine::curve::builder::ForwardCurve;
use hedge_engine::pnl::engine::PnlEngine;
use hedge_engine::risk::metrics::{RiskMetrics, RiskThresholds};
use hedge_engine::simulation::scenario::reference_rates;
use rust_decimal_macros::dec;

fn main() {
    println!("╔════════════════════════════════════════════╗");
    println!("║  hedge-engine: Basic P&L Analysis Example  ║");
    println!("╚════════════════════════════════════════════╝\n");

    let rates = reference_rates();
    let inception = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
    let maturity = NaiveDate::from_ymd_opt(2025, 9, 24).unwrap();

    // --- Scenario 1: Open a hedge and freeze its budgeted rate ---
    println!("━━━ Scenario 1: Contract Inception ━━━\n");

    let terms = ContractTerms {
        pair: "USD/INR".parse().unwrap(),
        amount: dec!(500_000),
        direction: Direction::Export,
        inception,
        maturity,
    };
    let inception_spot = RateSnapshot::new(85.5400, inception).unwrap();
    let contract = Contract::open(terms, &inception_spot, &rates).unwrap();

    println!("Pair:            {}", contract.pair());
    println!("Notional:        {} USD", contract.amount());
    println!("Tenor:           {} days", contract.tenor_days());
    println!("Inception spot:  {:.4}", contract.inception_spot());
    println!(
        "Budgeted fwd:    {:.4}  (frozen for the life of the contract)",
        contract.budgeted_forward_rate()
    );
    println!();

    // --- Scenario 2: The forward curve at inception ---
    println!("━━━ Scenario 2: Forward Curve ━━━\n");

    let curve = ForwardCurve::build(
        85.5400,
        contract.pair(),
        &rates,
        contract.tenor_days(),
    )
    .unwrap();

    println!("{:>6}  {:>10}", "Days", "Forward");
    for anchor in curve.anchors() {
        println!("{:>6}  {:>10.4}", anchor.days_to_maturity, anchor.forward_rate);
    }
    println!();

    // --- Scenario 3: Daily P&L series, re-evaluated mid-life ---
    println!("━━━ Scenario 3: Daily P&L (spot moved to 86.10) ━━━\n");

    let mid_life = RateSnapshot::new(86.1000, NaiveDate::from_ymd_opt(2025, 8, 1).unwrap())
        .unwrap();
    let series = PnlEngine::daily_series(&contract, &mid_life, &rates).unwrap();

    println!(
        "{:>4}  {:<12} {:>9} {:>12} {:>12} {:>14}",
        "Day", "Date", "Forward", "Daily P&L", "Cumulative", "Mark-to-Mkt"
    );
    for entry in series.iter().take(5) {
        println!(
            "{:>4}  {:<12} {:>9.4} {:>12.2} {:>12.2} {:>14.2}",
            entry.day_index,
            entry.date,
            entry.forward_rate,
            entry.daily_pnl,
            entry.cumulative_pnl,
            entry.mark_to_market
        );
    }
    println!("  ... ({} rows total)\n", series.len());

    // --- Scenario 4: Risk aggregation ---
    println!("━━━ Scenario 4: Risk Metrics ━━━\n");

    let metrics = RiskMetrics::aggregate(&series, &RiskThresholds::default());
    println!("{}", metrics);
}
