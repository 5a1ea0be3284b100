//! Debt Payoff - Multi-debt payoff simulation engine
//!
//! This library provides:
//! - Closed-form amortization primitives (payoff months, loan payments, utilization)
//! - Month-by-month avalanche and snowball payoff simulation with payment rollover
//! - Side-by-side strategy comparison and single-debt previews
//! - What-if batches over extra payment amounts
//! - CSV loading of debt records and locale-aware display formatting

pub mod amortization;
pub mod debt;
pub mod error;
pub mod format;
pub mod payoff;
pub mod scenario;

// Re-export commonly used types
pub use amortization::PayoffHorizon;
pub use debt::{Debt, DebtKind};
pub use error::{PayoffError, Result};
pub use payoff::{PayoffResult, PayoffSimulator, SimulationConfig, Strategy, StrategyComparison};
pub use scenario::ScenarioRunner;
