//! Closed-form single-debt payoff math

use serde::{Deserialize, Serialize};

use super::monthly_rate;
use crate::error::{PayoffError, Result};

/// How long a debt (or a set of debts) takes to clear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoffHorizon {
    /// Clears after this many months
    Months(u32),
    /// Payments never outrun the interest
    Never,
}

impl PayoffHorizon {
    pub fn is_payable(&self) -> bool {
        matches!(self, PayoffHorizon::Months(_))
    }

    /// Month count, or `NonConvergent` so callers can branch with `?`
    pub fn months(&self) -> Result<u32> {
        match self {
            PayoffHorizon::Months(m) => Ok(*m),
            PayoffHorizon::Never => Err(PayoffError::NonConvergent),
        }
    }

    pub fn as_option(&self) -> Option<u32> {
        match self {
            PayoffHorizon::Months(m) => Some(*m),
            PayoffHorizon::Never => None,
        }
    }
}

/// Months needed to clear `balance` paying `monthly_payment` every month
///
/// Uses the annuity payoff formula
/// `n = ceil(-ln(1 - B*r/P) / ln(1 + r))`, with a separate branch for a
/// zero rate. Returns `Never` whenever the payment does not exceed the
/// first month's interest.
pub fn months_to_payoff(balance: f64, annual_rate_pct: f64, monthly_payment: f64) -> PayoffHorizon {
    if balance <= 0.0 {
        return PayoffHorizon::Months(0);
    }
    if !(monthly_payment > 0.0) {
        return PayoffHorizon::Never;
    }

    let r = monthly_rate(annual_rate_pct);
    if r == 0.0 {
        return whole_months(balance / monthly_payment);
    }

    if monthly_payment <= balance * r {
        return PayoffHorizon::Never;
    }

    whole_months(-(1.0 - balance * r / monthly_payment).ln() / (1.0 + r).ln())
}

/// Round a fractional month count up, `Never` if it does not fit a `u32`
fn whole_months(months: f64) -> PayoffHorizon {
    let months = months.ceil();
    if !months.is_finite() || months > u32::MAX as f64 {
        return PayoffHorizon::Never;
    }
    PayoffHorizon::Months(months as u32)
}

/// Interest paid over `months` level payments, never negative
pub fn total_interest(balance: f64, monthly_payment: f64, months: u32) -> f64 {
    (monthly_payment * months as f64 - balance).max(0.0)
}

/// Level monthly payment that amortizes `principal` over `term_months`
pub fn loan_payment(principal: f64, annual_rate_pct: f64, term_months: u32) -> Result<f64> {
    if term_months == 0 {
        return Err(PayoffError::InvalidTerm);
    }

    let n = term_months as f64;
    let r = monthly_rate(annual_rate_pct);
    if r == 0.0 {
        return Ok(principal / n);
    }

    Ok(principal * r / (1.0 - (1.0 + r).powf(-n)))
}

/// Balance as a percentage of the credit limit; 0 when no usable limit
pub fn utilization(balance: f64, limit: f64) -> f64 {
    if limit <= 0.0 {
        0.0
    } else {
        balance / limit * 100.0
    }
}
