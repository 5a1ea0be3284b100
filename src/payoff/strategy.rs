//! Payoff ordering heuristics

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::debt::Debt;
use crate::error::PayoffError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Highest interest rate first
    Avalanche,
    /// Lowest balance first
    Snowball,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Avalanche, Strategy::Snowball];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Avalanche => "avalanche",
            Strategy::Snowball => "snowball",
        }
    }

    /// Sort debts into payoff order. The sort is stable, so ties keep input order.
    pub fn order(&self, debts: &mut [Debt]) {
        match self {
            Strategy::Avalanche => debts.sort_by(|a, b| b.annual_rate.total_cmp(&a.annual_rate)),
            Strategy::Snowball => debts.sort_by(|a, b| a.balance.total_cmp(&b.balance)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = PayoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "avalanche" => Ok(Strategy::Avalanche),
            "snowball" => Ok(Strategy::Snowball),
            _ => Err(PayoffError::UnknownStrategy(s.to_string())),
        }
    }
}
