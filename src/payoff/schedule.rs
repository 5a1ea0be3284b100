//! Output structures for payoff simulations

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Strategy;
use crate::amortization::{round_cents, PayoffHorizon};
use crate::debt::Debt;
use crate::error::Result;

/// One debt's settlement for one simulated month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub month: u32,
    pub debt_id: String,
    pub debt_name: String,

    /// Amount actually applied this month (principal + interest)
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    pub remaining_balance: f64,

    /// Part of `payment` that came from the rollover pool
    pub extra_applied: f64,
}

/// When a debt cleared
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub debt_id: String,
    pub debt_name: String,
    pub payoff_month: u32,
    pub original_balance: f64,
}

/// Complete result of one strategy run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffResult {
    pub strategy: Strategy,

    /// Months until every debt clears, or `Never` if the month cap was hit
    pub total_months: PayoffHorizon,

    /// Interest accrued over the simulated months
    pub total_interest: f64,

    pub total_starting_debt: f64,

    /// Start date plus `total_months`; `None` when non-convergent
    pub projected_debt_free_date: Option<NaiveDate>,

    /// Payoff events in month order
    pub timeline: Vec<TimelineEntry>,

    pub schedule: Vec<ScheduleEntry>,

    /// Debts in the order the strategy targets them
    pub final_order: Vec<Debt>,
}

impl PayoffResult {
    pub fn is_payable(&self) -> bool {
        self.total_months.is_payable()
    }

    /// Month of the first payoff event, the "first win"
    pub fn first_payoff_month(&self) -> Option<u32> {
        self.timeline.first().map(|t| t.payoff_month)
    }

    pub fn total_paid(&self) -> f64 {
        self.schedule.iter().map(|e| e.payment).sum()
    }

    /// Schedule rows for one debt
    pub fn entries_for<'a>(&'a self, debt_id: &'a str) -> impl Iterator<Item = &'a ScheduleEntry> + 'a {
        self.schedule.iter().filter(move |e| e.debt_id == debt_id)
    }

    /// Debt receiving the rollover pool in `month`
    pub fn focus_debt(&self, month: u32) -> Option<&Debt> {
        self.final_order.iter().find(|debt| {
            match self.timeline.iter().find(|t| t.debt_id == debt.id) {
                Some(event) => event.payoff_month >= month,
                None => true,
            }
        })
    }

    /// Cent-rounded figures for reporting
    pub fn summary(&self) -> PayoffSummary {
        PayoffSummary {
            strategy: self.strategy,
            total_months: self.total_months,
            total_interest: round_cents(self.total_interest),
            total_starting_debt: round_cents(self.total_starting_debt),
            total_paid: round_cents(self.total_paid()),
            projected_debt_free_date: self.projected_debt_free_date,
            first_payoff_month: self.first_payoff_month(),
            debts_cleared: self.timeline.len(),
            debt_count: self.final_order.len(),
        }
    }
}

/// Summary statistics for a payoff run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffSummary {
    pub strategy: Strategy,
    pub total_months: PayoffHorizon,
    pub total_interest: f64,
    pub total_starting_debt: f64,
    pub total_paid: f64,
    pub projected_debt_free_date: Option<NaiveDate>,
    pub first_payoff_month: Option<u32>,
    pub debts_cleared: usize,
    pub debt_count: usize,
}

/// Write schedule rows as CSV, amounts rounded to cents
pub fn write_schedule_csv<W: std::io::Write>(writer: W, entries: &[ScheduleEntry]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for entry in entries {
        csv_writer.serialize(ScheduleEntry {
            payment: round_cents(entry.payment),
            principal: round_cents(entry.principal),
            interest: round_cents(entry.interest),
            remaining_balance: round_cents(entry.remaining_balance),
            extra_applied: round_cents(entry.extra_applied),
            ..entry.clone()
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}
