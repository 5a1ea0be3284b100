//! AWS Lambda handler for payoff plan comparisons
//!
//! Accepts a debt snapshot and plan settings as JSON and returns both
//! strategy summaries plus the selected strategy's timeline (and optionally
//! its full monthly schedule).

use chrono::NaiveDate;
use debt_payoff::{
    payoff::{ComparisonSummary, ScheduleEntry, TimelineEntry, DEFAULT_MAX_MONTHS, DEFAULT_PAYOFF_EPSILON},
    Debt, PayoffSimulator, SimulationConfig, Strategy,
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};

/// Input for a payoff comparison
#[derive(Debug, Deserialize)]
pub struct PayoffRequest {
    pub debts: Vec<Debt>,

    /// Strategy whose timeline is returned (default: avalanche)
    #[serde(default = "default_strategy")]
    pub strategy: Strategy,

    /// Extra monthly amount applied to the focus debt
    #[serde(default)]
    pub extra_payment: f64,

    /// Plan start date, defaults to today
    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    #[serde(default = "default_max_months")]
    pub max_months: u32,

    #[serde(default = "default_payoff_epsilon")]
    pub payoff_epsilon: f64,

    /// Include the month-by-month schedule in the response
    #[serde(default)]
    pub include_schedule: bool,
}

fn default_strategy() -> Strategy { Strategy::Avalanche }
fn default_max_months() -> u32 { DEFAULT_MAX_MONTHS }
fn default_payoff_epsilon() -> f64 { DEFAULT_PAYOFF_EPSILON }

/// Output of a payoff comparison
#[derive(Debug, Serialize, Default)]
pub struct PayoffResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<Strategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ComparisonSummary>,
    pub timeline: Vec<TimelineEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<ScheduleEntry>>,
    pub execution_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn error_response(message: String) -> PayoffResponse {
    PayoffResponse {
        error: Some(message),
        ..Default::default()
    }
}

/// Lambda handler function
async fn handler(event: LambdaEvent<serde_json::Value>) -> Result<PayoffResponse, Error> {
    let start = std::time::Instant::now();

    let request: PayoffRequest = match serde_json::from_value(event.payload) {
        Ok(r) => r,
        Err(e) => return Ok(error_response(format!("Invalid JSON: {}", e))),
    };

    let simulator = PayoffSimulator::new(SimulationConfig {
        max_months: request.max_months,
        payoff_epsilon: request.payoff_epsilon,
        start_date: request.start_date,
    });

    let comparison = match simulator.compare(&request.debts, request.extra_payment) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("rejected payoff request: {}", e);
            return Ok(error_response(e.to_string()));
        }
    };

    let selected = comparison.result_for(request.strategy);
    let schedule = request.include_schedule.then(|| selected.schedule.clone());

    Ok(PayoffResponse {
        strategy: Some(request.strategy),
        comparison: Some(comparison.summary()),
        timeline: selected.timeline.clone(),
        schedule,
        execution_time_ms: start.elapsed().as_millis() as u64,
        error: None,
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
