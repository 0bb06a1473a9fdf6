//! Payment sensitivity sweep
//!
//! Sweeps down payment x loan term x credit tier for one vehicle price and
//! writes the monthly payment and affordability result for each combination
//! to CSV. Useful for eyeballing how far a larger down payment or longer term
//! moves a payment relative to the safe budget.

use clap::Parser;
use drivegoal_engine::finance::{self, AffordabilityGuideline, AprTiers};
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "payment_grid", about = "Sweep payment scenarios to CSV")]
struct Args {
    /// Vehicle price to sweep
    #[arg(long, default_value_t = 32_000.0)]
    price: f64,

    /// Gross annual income for the affordability column
    #[arg(long, default_value_t = 60_000.0)]
    income: f64,

    /// Largest down payment to sweep
    #[arg(long, default_value_t = 10_000.0)]
    max_down: f64,

    /// Down payment step size
    #[arg(long, default_value_t = 1_000.0)]
    down_step: f64,

    /// Output CSV path
    #[arg(long, default_value = "payment_grid.csv")]
    output: String,
}

/// Representative score for each APR tier
const TIER_SCORES: [u16; 3] = [760, 720, 650];

/// One swept scenario
#[derive(Debug, Clone, Copy)]
struct Scenario {
    down_payment: f64,
    term_years: u32,
    credit_score: u16,
}

/// One output row
#[derive(Debug, Serialize)]
struct GridRow {
    down_payment: f64,
    term_years: u32,
    credit_score: u16,
    apr_percent: f64,
    monthly_payment: f64,
    safe_budget: f64,
    within_budget: bool,
    gap: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let tiers = AprTiers::default();
    let guideline = AffordabilityGuideline::default();
    let safe_budget = guideline.safe_monthly_budget(args.income);

    // Build the full scenario grid up front
    let mut scenarios = Vec::new();
    let mut down = 0.0;
    while down <= args.max_down && down <= args.price {
        for term_years in 2..=8 {
            for score in TIER_SCORES {
                scenarios.push(Scenario {
                    down_payment: down,
                    term_years,
                    credit_score: score,
                });
            }
        }
        down += args.down_step.max(1.0);
    }

    println!(
        "Sweeping {} scenarios for ${:.0} at income ${:.0} (safe budget ${:.0})...",
        scenarios.len(),
        args.price,
        args.income,
        safe_budget
    );
    let start = Instant::now();

    let rows: Vec<GridRow> = scenarios
        .par_iter()
        .map(|s| {
            let apr = tiers.apr_for_score(s.credit_score);
            let payment = finance::finance_payment(args.price, s.down_payment, apr, s.term_years)
                .expect("grid terms are non-zero");
            let affordability = finance::evaluate(safe_budget, payment);
            GridRow {
                down_payment: s.down_payment,
                term_years: s.term_years,
                credit_score: s.credit_score,
                apr_percent: apr,
                monthly_payment: payment,
                safe_budget,
                within_budget: affordability.within_budget,
                gap: affordability.gap,
            }
        })
        .collect();

    println!("Sweep complete in {:?}", start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    let affordable = rows.iter().filter(|r| r.within_budget).count();
    println!(
        "{} of {} scenarios within budget; results written to {}",
        affordable,
        rows.len(),
        args.output
    );

    Ok(())
}
