//! Monthly obligations and debt-to-income ratio

use serde::{Deserialize, Serialize};

use super::frequency::{to_monthly, Frequency};
use crate::debt::Debt;
use crate::error::{PayoffError, Result};

/// A recurring bill (utilities, insurance, subscriptions)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub name: String,
    pub amount: f64,
    pub frequency: Frequency,
}

impl Bill {
    pub fn new(name: impl Into<String>, amount: f64, frequency: Frequency) -> Self {
        Self {
            name: name.into(),
            amount,
            frequency,
        }
    }

    pub fn monthly_amount(&self) -> f64 {
        to_monthly(self.amount, &self.frequency)
    }
}

/// Debt payments plus monthly-normalised bills
pub fn monthly_obligations(debts: &[Debt], bills: &[Bill]) -> f64 {
    let debt_payments: f64 = debts
        .iter()
        .filter(|d| d.balance > 0.0)
        .map(Debt::effective_payment)
        .sum();
    let bill_payments: f64 = bills.iter().map(Bill::monthly_amount).sum();
    debt_payments + bill_payments
}

/// Monthly obligations as a percentage of monthly income
pub fn debt_to_income(monthly_payments: f64, monthly_income: f64) -> Result<f64> {
    if !(monthly_income > 0.0) {
        return Err(PayoffError::InvalidIncome(monthly_income));
    }
    Ok(monthly_payments / monthly_income * 100.0)
}
