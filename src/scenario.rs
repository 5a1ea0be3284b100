//! Scenario runner for what-if payoff batches
//!
//! Holds one simulation config and runs many variations of a plan (different
//! extra payments, different households) in parallel.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::debt::Debt;
use crate::error::Result;
use crate::payoff::{PayoffSimulator, PayoffSummary, SimulationConfig, Strategy, StrategyComparison};

/// One row of an extra-payment sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraPaymentScenario {
    pub extra_payment: f64,
    pub summary: PayoffSummary,
}

/// Runner for batches of payoff simulations sharing one config
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(SimulationConfig::default());
/// for row in runner.extra_payment_sweep(&debts, Strategy::Avalanche, &[0.0, 50.0, 100.0])? {
///     println!("{}: {:?}", row.extra_payment, row.summary.total_months);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    simulator: PayoffSimulator,
}

impl ScenarioRunner {
    pub fn new(config: SimulationConfig) -> Self {
        // Pin the start date once so every scenario shares the same calendar
        Self {
            simulator: PayoffSimulator::new(config).anchored(),
        }
    }

    pub fn simulator(&self) -> &PayoffSimulator {
        &self.simulator
    }

    /// Simulate one strategy at each extra payment amount
    pub fn extra_payment_sweep(
        &self,
        debts: &[Debt],
        strategy: Strategy,
        extra_payments: &[f64],
    ) -> Result<Vec<ExtraPaymentScenario>> {
        extra_payments
            .par_iter()
            .map(|&extra_payment| -> Result<ExtraPaymentScenario> {
                let result = self.simulator.simulate(debts, strategy, extra_payment)?;
                Ok(ExtraPaymentScenario {
                    extra_payment,
                    summary: result.summary(),
                })
            })
            .collect()
    }

    /// Compare both strategies for many independent debt lists
    pub fn compare_batch(&self, households: &[Vec<Debt>], extra_payment: f64) -> Result<Vec<StrategyComparison>> {
        households
            .par_iter()
            .map(|debts| self.simulator.compare(debts, extra_payment))
            .collect()
    }
}
