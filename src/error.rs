//! Error type shared by the library and binaries

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayoffError {
    #[error("debt '{name}' has a negative balance ({balance})")]
    NegativeBalance { name: String, balance: f64 },

    #[error("debt '{name}' has an invalid {field}: {value}")]
    InvalidAmount {
        name: String,
        field: &'static str,
        value: f64,
    },

    #[error("duplicate debt id '{0}'")]
    DuplicateDebtId(String),

    #[error("extra payment must be a non-negative amount, got {0}")]
    NegativeExtraPayment(f64),

    #[error("payoff epsilon must be a non-negative amount, got {0}")]
    InvalidPayoffEpsilon(f64),

    #[error("unknown strategy '{0}' (expected 'avalanche' or 'snowball')")]
    UnknownStrategy(String),

    #[error("unknown debt kind '{0}' (expected 'credit_card' or 'loan')")]
    UnknownDebtKind(String),

    #[error("credit limit must be positive, got {0}")]
    InvalidCreditLimit(f64),

    #[error("loan term must be at least one month")]
    InvalidTerm,

    #[error("monthly income must be positive, got {0}")]
    InvalidIncome(f64),

    #[error("payments never cover the accruing interest")]
    NonConvergent,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PayoffError>;
