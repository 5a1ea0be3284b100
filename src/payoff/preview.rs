//! Single-debt payoff preview
//!
//! Runs the same simulator used for full plans, so a preview shown while
//! editing a debt matches the numbers in the committed plan.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::engine::PayoffSimulator;
use super::Strategy;
use crate::amortization::{months_to_payoff, PayoffHorizon};
use crate::debt::Debt;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtPreview {
    pub debt_id: String,
    pub debt_name: String,

    /// Simulated months to payoff
    pub months: PayoffHorizon,

    /// Closed-form estimate for the same payment
    pub estimated_months: PayoffHorizon,

    pub total_interest: f64,
    pub payoff_date: Option<NaiveDate>,

    /// First month's interest; the payment must exceed this to make progress
    pub monthly_interest: f64,

    pub utilization: Option<f64>,
}

impl PayoffSimulator {
    pub fn preview(&self, debt: &Debt) -> Result<DebtPreview> {
        let utilization = debt.utilization()?;
        let result = self.simulate(std::slice::from_ref(debt), Strategy::Avalanche, 0.0)?;

        Ok(DebtPreview {
            debt_id: debt.id.clone(),
            debt_name: debt.name.clone(),
            months: result.total_months,
            estimated_months: months_to_payoff(debt.balance, debt.annual_rate, debt.effective_payment()),
            total_interest: result.total_interest,
            payoff_date: result.projected_debt_free_date,
            monthly_interest: debt.monthly_interest(),
            utilization,
        })
    }
}
