//! Recurring bill frequencies and monthly normalisation

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How often a recurring amount is charged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Weekly,
    BiWeekly,
    Monthly,
    Quarterly,
    Annually,
    /// Any label we do not recognise; amounts pass through unchanged
    Other(String),
}

impl Frequency {
    /// Multiplier that converts one charge into a monthly equivalent
    pub fn monthly_factor(&self) -> f64 {
        match self {
            Frequency::Weekly => 52.0 / 12.0,
            Frequency::BiWeekly => 26.0 / 12.0,
            Frequency::Monthly => 1.0,
            Frequency::Quarterly => 1.0 / 3.0,
            Frequency::Annually => 1.0 / 12.0,
            Frequency::Other(_) => 1.0,
        }
    }
}

impl FromStr for Frequency {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "");
        Ok(match normalized.as_str() {
            "weekly" => Frequency::Weekly,
            "biweekly" | "fortnightly" => Frequency::BiWeekly,
            "monthly" => Frequency::Monthly,
            "quarterly" => Frequency::Quarterly,
            "annually" | "annual" | "yearly" => Frequency::Annually,
            _ => Frequency::Other(s.to_string()),
        })
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Weekly => f.write_str("weekly"),
            Frequency::BiWeekly => f.write_str("bi-weekly"),
            Frequency::Monthly => f.write_str("monthly"),
            Frequency::Quarterly => f.write_str("quarterly"),
            Frequency::Annually => f.write_str("annually"),
            Frequency::Other(label) => f.write_str(label),
        }
    }
}

/// Convert a recurring amount to its monthly equivalent
pub fn to_monthly(amount: f64, frequency: &Frequency) -> f64 {
    amount * frequency.monthly_factor()
}
