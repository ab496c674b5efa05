use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hedge_engine::core::rates::RateSnapshot;
use hedge_engine::curve::builder::ForwardCurve;
use hedge_engine::pnl::engine::PnlEngine;
use hedge_engine::risk::metrics::{RiskMetrics, RiskThresholds};
use hedge_engine::simulation::scenario::{
    generate_random_portfolio, reference_rates, PortfolioConfig,
};

fn bench_curve_build(c: &mut Criterion) {
    let rates = reference_rates();
    let pair = "USD/INR".parse().unwrap();

    c.bench_function("curve_build_365_days", |b| {
        b.iter(|| ForwardCurve::build(black_box(85.54), &pair, &rates, black_box(365)))
    });
}

fn bench_daily_series_90_days(c: &mut Criterion) {
    let rates = reference_rates();
    let config = PortfolioConfig {
        contract_count: 1,
        min_tenor_days: 90,
        max_tenor_days: 90,
        ..Default::default()
    };
    let contract = generate_random_portfolio(&config, &rates)
        .unwrap()
        .remove(0);
    let snapshot = RateSnapshot::new(85.90, config.as_of).unwrap();

    c.bench_function("daily_series_90_days", |b| {
        b.iter(|| PnlEngine::daily_series(black_box(&contract), &snapshot, &rates))
    });
}

fn bench_portfolio_100_contracts(c: &mut Criterion) {
    let rates = reference_rates();
    let config = PortfolioConfig {
        contract_count: 100,
        ..Default::default()
    };
    let portfolio = generate_random_portfolio(&config, &rates).unwrap();
    let snapshot = RateSnapshot::new(85.90, config.as_of).unwrap();
    let thresholds = RiskThresholds::default();

    c.bench_function("portfolio_100_contracts", |b| {
        b.iter(|| {
            for contract in black_box(&portfolio) {
                let series = PnlEngine::daily_series(contract, &snapshot, &rates).unwrap();
                black_box(RiskMetrics::aggregate(&series, &thresholds));
            }
        })
    });
}

fn bench_portfolio_1000_contracts(c: &mut Criterion) {
    let rates = reference_rates();
    let config = PortfolioConfig {
        contract_count: 1000,
        ..Default::default()
    };
    let portfolio = generate_random_portfolio(&config, &rates).unwrap();
    let snapshot = RateSnapshot::new(85.90, config.as_of).unwrap();
    let thresholds = RiskThresholds::default();

    c.bench_function("portfolio_1000_contracts", |b| {
        b.iter(|| {
            for contract in black_box(&portfolio) {
                let series = PnlEngine::daily_series(contract, &snapshot, &rates).unwrap();
                black_box(RiskMetrics::aggregate(&series, &thresholds));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_curve_build,
    bench_daily_series_90_days,
    bench_portfolio_100_contracts,
    bench_portfolio_1000_contracts
);
criterion_main!(benches);
