//! Stateless amortization math shared by the simulator and single-debt previews

mod budget;
mod frequency;
mod payoff;

pub use budget::{debt_to_income, monthly_obligations, Bill};
pub use frequency::{to_monthly, Frequency};
pub use payoff::{loan_payment, months_to_payoff, total_interest, utilization, PayoffHorizon};

/// Annual percentage rate to a monthly decimal rate (12% -> 0.01)
pub fn monthly_rate(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / 100.0 / 12.0
}

/// Round a monetary amount to cents for reporting
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
