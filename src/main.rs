//! Debt Payoff CLI
//!
//! Loads debts from CSV, compares avalanche and snowball plans, and prints
//! the selected plan's payoff timeline.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;

use debt_payoff::debt::load_debts;
use debt_payoff::format::{self, CurrencyFormat};
use debt_payoff::payoff::{write_schedule_csv, PayoffResult, DEFAULT_MAX_MONTHS, DEFAULT_PAYOFF_EPSILON};
use debt_payoff::{PayoffSimulator, SimulationConfig, Strategy};

#[derive(Debug, Parser)]
#[command(version, about = "Simulate multi-debt payoff with avalanche and snowball strategies")]
struct Args {
    /// CSV file with columns id,kind,name,balance,annual_rate,payment[,extra_payment,credit_limit]
    debts: PathBuf,

    /// Strategy whose timeline is printed
    #[arg(short, long, default_value = "avalanche")]
    strategy: Strategy,

    /// Extra monthly amount applied to the focus debt
    #[arg(short, long, default_value_t = 0.0)]
    extra: f64,

    /// Months to simulate before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_MONTHS)]
    max_months: u32,

    /// Remaining balance treated as paid off
    #[arg(long, default_value_t = DEFAULT_PAYOFF_EPSILON)]
    epsilon: f64,

    /// Plan start date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Write the selected plan's monthly schedule to this CSV file
    #[arg(long)]
    schedule_out: Option<PathBuf>,

    /// Print the comparison summary as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let debts = load_debts(&args.debts)
        .with_context(|| format!("failed to load debts from {}", args.debts.display()))?;
    log::info!("loaded {} debts from {}", debts.len(), args.debts.display());

    let simulator = PayoffSimulator::new(SimulationConfig {
        max_months: args.max_months,
        payoff_epsilon: args.epsilon,
        start_date: args.start_date,
    });
    let comparison = simulator.compare(&debts, args.extra)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&comparison.summary())?);
    } else {
        let fmt = CurrencyFormat::us();
        println!("Debt Payoff Plan");
        println!("================\n");
        println!("Debts: {}   Extra payment: {}\n", debts.len(), fmt.currency(args.extra));

        println!("{:<12} {:>20} {:>14} {:>16} {:>12}", "Strategy", "Time to debt free", "Interest", "Debt free by", "First win");
        println!("{}", "-".repeat(78));
        for result in [&comparison.avalanche, &comparison.snowball] {
            print_strategy_row(result, &fmt);
        }

        println!();
        if let Some(line) = savings_line(comparison.interest_savings, comparison.time_difference, &fmt) {
            println!("{}", line);
        }
        match comparison.time_difference {
            Some(0) => println!("Both plans finish in the same month"),
            Some(diff) if diff < 0 => println!("Avalanche finishes {} month(s) sooner", -diff),
            Some(diff) => println!("Snowball finishes {} month(s) sooner", diff),
            None => println!("At least one plan never pays off; increase payments"),
        }

        let selected = comparison.result_for(args.strategy);
        println!("\n{} payoff order:", args.strategy);
        for event in &selected.timeline {
            println!(
                "  Month {:>3}: {:<20} {:>12}",
                event.payoff_month,
                event.debt_name,
                fmt.currency(event.original_balance)
            );
        }
        for debt in selected.final_order.iter().filter(|d| !selected.timeline.iter().any(|t| t.debt_id == d.id)) {
            println!("  Never:      {:<20} {:>12}", debt.name, fmt.currency(debt.balance));
        }
    }

    if let Some(path) = &args.schedule_out {
        let file = File::create(path).with_context(|| format!("unable to create {}", path.display()))?;
        let selected = comparison.result_for(args.strategy);
        write_schedule_csv(file, &selected.schedule)?;
        if !args.json {
            println!("\nFull schedule written to: {}", path.display());
        }
    }

    Ok(())
}

fn print_strategy_row(result: &PayoffResult, fmt: &CurrencyFormat) {
    let date = result
        .projected_debt_free_date
        .map(format::month_year)
        .unwrap_or_else(|| "-".to_string());
    let first_win = result
        .first_payoff_month()
        .map(|m| format!("month {}", m))
        .unwrap_or_else(|| "-".to_string());

    println!(
        "{:<12} {:>20} {:>14} {:>16} {:>12}",
        result.strategy.as_str(),
        format::horizon(result.total_months),
        fmt.currency(result.total_interest),
        date,
        first_win
    );
}

/// Interest comparison sentence, skipped when either plan never pays off
fn savings_line(savings: f64, time_difference: Option<i64>, fmt: &CurrencyFormat) -> Option<String> {
    time_difference?;
    let line = if savings > 0.0 {
        format!("Avalanche saves {} in interest", fmt.currency(savings))
    } else if savings < 0.0 {
        format!("Snowball saves {} in interest", fmt.currency(-savings))
    } else {
        "Both plans pay the same interest".to_string()
    };
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_savings_line_follows_sign() {
        let fmt = CurrencyFormat::us();
        assert_eq!(
            savings_line(12.5, Some(-2), &fmt).unwrap(),
            format!("Avalanche saves {} in interest", fmt.currency(12.5))
        );
        assert_eq!(
            savings_line(-12.5, Some(1), &fmt).unwrap(),
            format!("Snowball saves {} in interest", fmt.currency(12.5))
        );
        assert_eq!(savings_line(0.0, Some(0), &fmt).unwrap(), "Both plans pay the same interest");
    }

    #[test]
    fn test_savings_line_skipped_when_a_plan_never_pays() {
        assert!(savings_line(-1e6, None, &CurrencyFormat::us()).is_none());
    }
}
