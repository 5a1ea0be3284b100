//! Multi-debt payoff simulation, strategy comparison and previews

mod compare;
mod engine;
mod preview;
mod schedule;
mod state;
mod strategy;

pub use compare::{ComparisonSummary, StrategyComparison};
pub use engine::{PayoffSimulator, SimulationConfig, DEFAULT_MAX_MONTHS, DEFAULT_PAYOFF_EPSILON};
pub use preview::DebtPreview;
pub use schedule::{write_schedule_csv, PayoffResult, PayoffSummary, ScheduleEntry, TimelineEntry};
pub use state::{SimulationState, WorkingDebt};
pub use strategy::Strategy;
