//! Debt records fed into the payoff engine

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::amortization;
use crate::error::{PayoffError, Result};

/// Kind of debt. Informational only, the simulation treats both the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtKind {
    /// Revolving credit (payment is the card minimum)
    CreditCard,
    /// Installment loan or mortgage (payment is the scheduled amount)
    Loan,
}

impl DebtKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DebtKind::CreditCard => "credit_card",
            DebtKind::Loan => "loan",
        }
    }
}

impl fmt::Display for DebtKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DebtKind {
    type Err = PayoffError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "credit_card" | "card" => Ok(DebtKind::CreditCard),
            "loan" | "mortgage" => Ok(DebtKind::Loan),
            _ => Err(PayoffError::UnknownDebtKind(s.to_string())),
        }
    }
}

/// A single debt as supplied by the caller's record store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    /// Identifier, unique within one simulation run
    pub id: String,

    pub kind: DebtKind,

    /// Display label
    pub name: String,

    /// Current principal owed
    pub balance: f64,

    /// Nominal annual interest rate in percent (18.0 = 18%)
    pub annual_rate: f64,

    /// Contractual monthly payment
    pub payment: f64,

    /// Voluntary monthly top-up on this debt alone
    #[serde(default)]
    pub extra_payment: f64,

    /// Credit limit for revolving debts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_limit: Option<f64>,
}

impl Debt {
    pub fn new(
        id: impl Into<String>,
        kind: DebtKind,
        name: impl Into<String>,
        balance: f64,
        annual_rate: f64,
        payment: f64,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            name: name.into(),
            balance,
            annual_rate,
            payment,
            extra_payment: 0.0,
            credit_limit: None,
        }
    }

    pub fn with_extra_payment(mut self, extra_payment: f64) -> Self {
        self.extra_payment = extra_payment;
        self
    }

    pub fn with_credit_limit(mut self, credit_limit: f64) -> Self {
        self.credit_limit = Some(credit_limit);
        self
    }

    /// Amount paid toward this debt every month, and rolled over once it clears
    pub fn effective_payment(&self) -> f64 {
        self.payment + self.extra_payment
    }

    /// Monthly rate as a decimal (18% annual -> 0.015)
    pub fn monthly_rate(&self) -> f64 {
        amortization::monthly_rate(self.annual_rate)
    }

    /// Interest accruing on the current balance over one month
    pub fn monthly_interest(&self) -> f64 {
        self.balance * self.monthly_rate()
    }

    /// Credit utilization in percent, `None` when no limit is on file
    pub fn utilization(&self) -> Result<Option<f64>> {
        match self.credit_limit {
            None => Ok(None),
            Some(limit) if !(limit > 0.0) => Err(PayoffError::InvalidCreditLimit(limit)),
            Some(limit) => Ok(Some(amortization::utilization(self.balance, limit))),
        }
    }

    /// Reject records that would produce garbage simulation output
    pub fn validate(&self) -> Result<()> {
        if !self.balance.is_finite() {
            return Err(self.invalid("balance", self.balance));
        }
        if self.balance < 0.0 {
            return Err(PayoffError::NegativeBalance {
                name: self.name.clone(),
                balance: self.balance,
            });
        }
        for (field, value) in [
            ("annual_rate", self.annual_rate),
            ("payment", self.payment),
            ("extra_payment", self.extra_payment),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(self.invalid(field, value));
            }
        }
        Ok(())
    }

    fn invalid(&self, field: &'static str, value: f64) -> PayoffError {
        PayoffError::InvalidAmount {
            name: self.name.clone(),
            field,
            value,
        }
    }
}

/// Validate every debt and check that ids are unique
pub fn validate_debts(debts: &[Debt]) -> Result<()> {
    let mut seen = HashSet::with_capacity(debts.len());
    for debt in debts {
        debt.validate()?;
        if !seen.insert(debt.id.as_str()) {
            return Err(PayoffError::DuplicateDebtId(debt.id.clone()));
        }
    }
    Ok(())
}
