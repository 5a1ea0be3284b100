//! Side-by-side avalanche vs snowball comparison

use serde::{Deserialize, Serialize};

use super::engine::PayoffSimulator;
use super::schedule::{PayoffResult, PayoffSummary};
use super::Strategy;
use crate::debt::Debt;
use crate::error::Result;

/// Both strategy runs over the same debts and extra payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyComparison {
    pub avalanche: PayoffResult,
    pub snowball: PayoffResult,

    /// Snowball interest minus avalanche interest
    pub interest_savings: f64,

    /// Avalanche months minus snowball months; `None` if either never pays off
    pub time_difference: Option<i64>,
}

impl StrategyComparison {
    pub fn new(avalanche: PayoffResult, snowball: PayoffResult) -> Self {
        let interest_savings = snowball.total_interest - avalanche.total_interest;
        let time_difference = match (avalanche.total_months.as_option(), snowball.total_months.as_option()) {
            (Some(a), Some(s)) => Some(a as i64 - s as i64),
            _ => None,
        };

        Self {
            avalanche,
            snowball,
            interest_savings,
            time_difference,
        }
    }

    pub fn result_for(&self, strategy: Strategy) -> &PayoffResult {
        match strategy {
            Strategy::Avalanche => &self.avalanche,
            Strategy::Snowball => &self.snowball,
        }
    }

    pub fn summary(&self) -> ComparisonSummary {
        ComparisonSummary {
            avalanche: self.avalanche.summary(),
            snowball: self.snowball.summary(),
            interest_savings: crate::amortization::round_cents(self.interest_savings),
            time_difference: self.time_difference,
        }
    }
}

/// Reporting view of a comparison, without schedules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub avalanche: PayoffSummary,
    pub snowball: PayoffSummary,
    pub interest_savings: f64,
    pub time_difference: Option<i64>,
}

impl PayoffSimulator {
    /// Run both strategies on identical inputs, in parallel
    pub fn compare(&self, debts: &[Debt], extra_payment: f64) -> Result<StrategyComparison> {
        let simulator = self.anchored();
        let (avalanche, snowball) = rayon::join(
            || simulator.simulate(debts, Strategy::Avalanche, extra_payment),
            || simulator.simulate(debts, Strategy::Snowball, extra_payment),
        );
        Ok(StrategyComparison::new(avalanche?, snowball?))
    }
}
