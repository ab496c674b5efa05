//! hedge-engine CLI
//!
//! Price forward curves and attribute hedge P&L from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Attribute daily P&L for a contract
//! hedge-engine analyze --pair USD/INR --amount 500000 --direction export \
//!     --inception 2025-07-01 --maturity 2025-09-24 --inception-spot 85.54
//!
//! # Print the forward curve for a pair
//! hedge-engine curve --pair USD/INR --spot 85.54 --days 180
//!
//! # Generate a random contract portfolio for testing
//! hedge-engine generate --contracts 10
//! ```

use chrono::NaiveDate;
use hedge_engine::core::contract::{Contract, ContractTerms, Direction};
use hedge_engine::core::currency::CurrencyPair;
use hedge_engine::core::rates::{InterestRateTable, RateSnapshot};
use hedge_engine::curve::builder::ForwardCurve;
use hedge_engine::pnl::engine::{DailyPnlEntry, PnlEngine};
use hedge_engine::risk::metrics::{RiskMetrics, RiskThresholds};
use hedge_engine::simulation::scenario::{
    generate_random_portfolio, reference_rates, PortfolioConfig,
};
use rust_decimal::Decimal;
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"hedge-engine — open FX forward curve and daily P&L attribution engine

USAGE:
    hedge-engine <COMMAND> [OPTIONS]

COMMANDS:
    analyze     Attribute daily P&L for a hedge contract
    curve       Print the IRP forward curve for a currency pair
    generate    Generate a random contract portfolio (for testing)
    help        Show this message

OPTIONS (analyze):
    --pair <BASE/QUOTE>      Currency pair, e.g. USD/INR
    --amount <N>             Notional in base-currency units
    --direction <DIR>        export | import | forward | spot | swap | option
    --inception <DATE>       Contract inception (YYYY-MM-DD)
    --maturity <DATE>        Contract maturity (YYYY-MM-DD)
    --inception-spot <RATE>  Spot rate observed at inception
    --spot <RATE>            Current live spot (default: inception spot)
    --as-of <DATE>           Evaluation date (default: inception)
    --rates <FILE>           JSON interest-rate table override
    --format <FORMAT>        Output format: text (default) or json
    --rows <N>               Daily rows to print in text mode (default: 10)

OPTIONS (curve):
    --pair <BASE/QUOTE>      Currency pair
    --spot <RATE>            Current spot rate
    --days <N>               Curve horizon in days
    --rates <FILE>           JSON interest-rate table override

OPTIONS (generate):
    --contracts <N>          Number of contracts (default: 10)
    --output <FILE>          Write to file instead of stdout

EXAMPLES:
    hedge-engine analyze --pair USD/INR --amount 500000 --direction export \
        --inception 2025-07-01 --maturity 2025-09-24 --inception-spot 85.54
    hedge-engine analyze ... --as-of 2025-08-01 --spot 86.10 --format json
    hedge-engine curve --pair USD/INR --spot 85.54 --days 365
    hedge-engine generate --contracts 25 --output portfolio.json"#
    );
}

/// JSON output schema for the analyze command.
#[derive(serde::Serialize)]
struct AnalysisOutput {
    contract_id: String,
    pair: String,
    direction: String,
    amount: String,
    budgeted_forward_rate: f64,
    as_of: NaiveDate,
    entries: Vec<DailyPnlEntry>,
    risk: RiskMetrics,
}

fn require<T>(value: Option<T>, flag: &str) -> T {
    value.unwrap_or_else(|| {
        eprintln!("Error: {} is required", flag);
        process::exit(1);
    })
}

fn parse_flag_value(args: &[String], i: &mut usize, flag: &str) -> String {
    *i += 1;
    args.get(*i).cloned().unwrap_or_else(|| {
        eprintln!("{} requires a value", flag);
        process::exit(1);
    })
}

fn parse_date(value: &str, flag: &str) -> NaiveDate {
    value.parse().unwrap_or_else(|e| {
        eprintln!("{}: invalid date '{}': {}", flag, value, e);
        process::exit(1);
    })
}

fn parse_f64(value: &str, flag: &str) -> f64 {
    value.parse().unwrap_or_else(|e| {
        eprintln!("{}: invalid number '{}': {}", flag, value, e);
        process::exit(1);
    })
}

fn parse_direction(value: &str) -> Direction {
    match value.to_ascii_lowercase().as_str() {
        "export" => Direction::Export,
        "import" => Direction::Import,
        "forward" => Direction::Forward,
        "spot" => Direction::Spot,
        "swap" => Direction::Swap,
        "option" => Direction::Option,
        other => {
            eprintln!("Unknown direction: {}", other);
            process::exit(1);
        }
    }
}

fn load_rates(path: Option<&str>) -> InterestRateTable {
    match path {
        None => reference_rates(),
        Some(path) => {
            let content = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error reading rates file '{}': {}", path, e);
                process::exit(1);
            });
            serde_json::from_str(&content).unwrap_or_else(|e| {
                eprintln!("Error parsing rates JSON: {}", e);
                eprintln!(r#"Expected format: {{ "USD": 0.045, "INR": 0.055 }}"#);
                process::exit(1);
            })
        }
    }
}

fn cmd_analyze(args: &[String]) {
    let mut pair: Option<CurrencyPair> = None;
    let mut amount: Option<Decimal> = None;
    let mut direction = Direction::Forward;
    let mut inception: Option<NaiveDate> = None;
    let mut maturity: Option<NaiveDate> = None;
    let mut inception_spot: Option<f64> = None;
    let mut current_spot: Option<f64> = None;
    let mut as_of: Option<NaiveDate> = None;
    let mut rates_path: Option<String> = None;
    let mut format = "text".to_string();
    let mut rows = 10usize;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--pair" => {
                let value = parse_flag_value(args, &mut i, "--pair");
                pair = Some(value.parse().unwrap_or_else(|e| {
                    eprintln!("--pair: {}", e);
                    process::exit(1);
                }));
            }
            "--amount" => {
                let value = parse_flag_value(args, &mut i, "--amount");
                amount = Some(value.parse().unwrap_or_else(|e| {
                    eprintln!("--amount: invalid amount '{}': {}", value, e);
                    process::exit(1);
                }));
            }
            "--direction" => {
                let value = parse_flag_value(args, &mut i, "--direction");
                direction = parse_direction(&value);
            }
            "--inception" => {
                let value = parse_flag_value(args, &mut i, "--inception");
                inception = Some(parse_date(&value, "--inception"));
            }
            "--maturity" => {
                let value = parse_flag_value(args, &mut i, "--maturity");
                maturity = Some(parse_date(&value, "--maturity"));
            }
            "--inception-spot" => {
                let value = parse_flag_value(args, &mut i, "--inception-spot");
                inception_spot = Some(parse_f64(&value, "--inception-spot"));
            }
            "--spot" => {
                let value = parse_flag_value(args, &mut i, "--spot");
                current_spot = Some(parse_f64(&value, "--spot"));
            }
            "--as-of" => {
                let value = parse_flag_value(args, &mut i, "--as-of");
                as_of = Some(parse_date(&value, "--as-of"));
            }
            "--rates" => {
                rates_path = Some(parse_flag_value(args, &mut i, "--rates"));
            }
            "--format" => {
                format = parse_flag_value(args, &mut i, "--format");
            }
            "--rows" => {
                let value = parse_flag_value(args, &mut i, "--rows");
                rows = value.parse().unwrap_or_else(|_| {
                    eprintln!("--rows requires a number");
                    process::exit(1);
                });
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let pair = require(pair, "--pair");
    let amount = require(amount, "--amount");
    let inception = require(inception, "--inception");
    let maturity = require(maturity, "--maturity");
    let inception_spot = require(inception_spot, "--inception-spot");

    let rates = load_rates(rates_path.as_deref());
    let as_of = as_of.unwrap_or(inception);
    let current_spot = current_spot.unwrap_or(inception_spot);

    let inception_snapshot = RateSnapshot::new(inception_spot, inception).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });
    let terms = ContractTerms {
        pair: pair.clone(),
        amount,
        direction,
        inception,
        maturity,
    };
    let contract = Contract::open(terms, &inception_snapshot, &rates).unwrap_or_else(|e| {
        eprintln!("Error opening contract: {}", e);
        process::exit(1);
    });

    let snapshot = RateSnapshot::new(current_spot, as_of).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });
    let series = PnlEngine::daily_series(&contract, &snapshot, &rates).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });
    let risk = RiskMetrics::aggregate(&series, &RiskThresholds::default());

    if format == "json" {
        let output = AnalysisOutput {
            contract_id: contract.id().to_string(),
            pair: pair.to_string(),
            direction: format!("{:?}", contract.direction()).to_lowercase(),
            amount: contract.amount().to_string(),
            budgeted_forward_rate: contract.budgeted_forward_rate(),
            as_of,
            entries: series,
            risk,
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    } else {
        println!("=== Contract ===");
        println!("Pair:           {}", pair);
        println!("Notional:       {} {}", contract.amount(), pair.base);
        println!("Direction:      {:?}", contract.direction());
        println!("Inception:      {} @ {}", inception, inception_spot);
        println!("Maturity:       {} ({} days)", maturity, contract.tenor_days());
        println!("Budgeted Fwd:   {:.4}", contract.budgeted_forward_rate());
        println!();
        println!("=== Daily P&L (as of {}, spot {}) ===", as_of, current_spot);
        println!(
            "{:<12} {:>5} {:>10} {:>12} {:>14} {:>14}",
            "Date", "DTM", "Forward", "Daily P&L", "Cumulative", "MTM"
        );
        for entry in series.iter().take(rows) {
            println!(
                "{:<12} {:>5} {:>10.4} {:>12.2} {:>14.2} {:>14.2}",
                entry.date.to_string(),
                entry.days_to_maturity,
                entry.forward_rate,
                entry.daily_pnl,
                entry.cumulative_pnl,
                entry.mark_to_market
            );
        }
        if series.len() > rows {
            println!("... ({} more rows)", series.len() - rows);
        }
        println!();
        println!("{}", risk);
    }
}

fn cmd_curve(args: &[String]) {
    let mut pair: Option<CurrencyPair> = None;
    let mut spot: Option<f64> = None;
    let mut days: Option<i64> = None;
    let mut rates_path: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--pair" => {
                let value = parse_flag_value(args, &mut i, "--pair");
                pair = Some(value.parse().unwrap_or_else(|e| {
                    eprintln!("--pair: {}", e);
                    process::exit(1);
                }));
            }
            "--spot" => {
                let value = parse_flag_value(args, &mut i, "--spot");
                spot = Some(parse_f64(&value, "--spot"));
            }
            "--days" => {
                let value = parse_flag_value(args, &mut i, "--days");
                days = Some(value.parse().unwrap_or_else(|_| {
                    eprintln!("--days requires a number");
                    process::exit(1);
                }));
            }
            "--rates" => {
                rates_path = Some(parse_flag_value(args, &mut i, "--rates"));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let pair = require(pair, "--pair");
    let spot = require(spot, "--spot");
    let days = require(days, "--days");

    let rates = load_rates(rates_path.as_deref());
    let curve = ForwardCurve::build(spot, &pair, &rates, days).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    println!("=== {} Forward Curve (spot {}) ===", pair, spot);
    println!("{:<8} {:>10} {:>8}", "Tenor", "Forward", "Years");
    for anchor in curve.anchors() {
        println!(
            "{:<8} {:>10.4} {:>8.4}",
            format!("{}D", anchor.days_to_maturity),
            anchor.forward_rate,
            anchor.time_to_maturity
        );
    }
}

fn cmd_generate(args: &[String]) {
    let mut contracts = 10usize;
    let mut output_path: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--contracts" => {
                let value = parse_flag_value(args, &mut i, "--contracts");
                contracts = value.parse().unwrap_or_else(|_| {
                    eprintln!("--contracts requires a number");
                    process::exit(1);
                });
            }
            "--output" => {
                output_path = Some(parse_flag_value(args, &mut i, "--output"));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let config = PortfolioConfig {
        contract_count: contracts,
        ..Default::default()
    };
    let rates = reference_rates();
    let portfolio = generate_random_portfolio(&config, &rates).unwrap_or_else(|e| {
        eprintln!("Error generating portfolio: {}", e);
        process::exit(1);
    });

    let json = serde_json::to_string_pretty(&portfolio).unwrap();
    if let Some(path) = output_path {
        fs::write(&path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!("Generated {} contracts → {}", portfolio.len(), path);
    } else {
        println!("{}", json);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "analyze" => cmd_analyze(rest),
        "curve" => cmd_curve(rest),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
