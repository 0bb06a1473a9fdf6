//! DriveGoal Engine CLI
//!
//! Runs the worked example: a $60k-income user saving toward a RAV4, with a
//! month of sample transactions and a financed-payment simulation.

use chrono::NaiveDate;
use drivegoal_engine::{
    finance,
    records::{Lifestyle, VehicleModel},
    Budget, Goal, PaymentPlan, PaymentSimulation, Profile, SummaryAssembler, SummaryInput,
    Transaction,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("DriveGoal Engine v0.1.0");
    println!("=======================\n");

    let profile = Profile::new(60_000.0, 760, Lifestyle::Balanced);
    let goal = Goal::new("RAV4", 25_000.0, 5_000.0);

    let d = |day| NaiveDate::from_ymd_opt(2024, 3, day).unwrap();
    let transactions = vec![
        Transaction::new(100.0, d(1), "Savings"),
        Transaction::new(75.0, d(2), "Savings"),
        Transaction::new(-62.0, d(2), "Food"),
        Transaction::new(50.0, d(3), "Savings"),
        Transaction::new(-28.0, d(3), "Food"),
        Transaction::new(-45.0, d(7), "Gas"),
    ];
    let budgets = vec![Budget::new("Food", 100.0), Budget::new("Gas", 150.0)];

    println!(
        "Profile: income ${:.0}, credit {}",
        profile.annual_income, profile.credit_score
    );
    println!(
        "Goal: {} (${:.0} target, ${:.0} saved)\n",
        goal.name, goal.target_amount, goal.total_saved
    );

    let input = SummaryInput {
        profile: Some(profile),
        goal: Some(goal),
        budgets,
        transactions,
        monthly_contribution: 300.0,
        simulation: Some(PaymentSimulation {
            price: VehicleModel::Rav4.est_price(),
            down_payment: 2_000.0,
            plan: PaymentPlan::Finance { term_years: 5 },
        }),
        period_start: d(1),
    };

    let assembler = SummaryAssembler::new();
    let summary = assembler.assemble(&input);

    println!("Progress Summary:");
    println!("  Safe Monthly Budget: ${}", summary.safe_budget);
    match summary.estimated_payment {
        Some(pmt) => println!("  Estimated Payment:   ${:.2}", pmt),
        None => println!("  Estimated Payment:   (no simulation)"),
    }
    println!("  Within Budget:       {}", summary.within_budget);
    println!("  Affordability Gap:   ${:.2}", summary.affordability_gap);
    println!("  Time to Goal:        {}", summary.projection_months);
    println!("  Goal Progress:       {}%", summary.goal_percent);
    println!("  Streak:              {} day(s)", summary.streak);
    println!("  Milestones:          {:?}", summary.milestones);
    for flag in &summary.budget_flags {
        println!(
            "  Budget Warning:      {} at {}% (${:.0} of ${:.0})",
            flag.category, flag.percent, flag.used, flag.limit
        );
    }

    // Per-model payment comparison at this user's credit tier
    let apr = assembler.terms().apr_tiers.apr_for_score(760);
    println!("\nPayment Comparison ({}% APR, 60 mo finance / 36 mo lease):", apr);
    println!("{:>12} {:>10} {:>12} {:>12}", "Model", "Price", "Finance", "Lease");
    println!("{}", "-".repeat(50));
    for model in VehicleModel::all() {
        let price = model.est_price();
        let finance_pmt = finance::finance_payment(price, 2_000.0, apr, 5)?;
        let lease_pmt = finance::lease_payment(price, 2_000.0, &assembler.terms().lease)?.max(0.0);
        println!(
            "{:>12} {:>10.0} {:>12.2} {:>12.2}",
            model.as_str(),
            price,
            finance_pmt,
            lease_pmt
        );
    }

    println!("\nFull payload:");
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
