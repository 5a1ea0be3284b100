//! Load debts from CSV exports of the record store

use super::{validate_debts, Debt, DebtKind};
use crate::error::Result;
use csv::Reader;
use std::path::Path;

/// Raw CSV row; the two trailing columns may be absent or empty
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    id: String,
    kind: String,
    name: String,
    balance: f64,
    annual_rate: f64,
    payment: f64,
    #[serde(default)]
    extra_payment: Option<f64>,
    #[serde(default)]
    credit_limit: Option<f64>,
}

impl CsvRow {
    fn to_debt(self) -> Result<Debt> {
        let kind: DebtKind = self.kind.parse()?;

        Ok(Debt {
            id: self.id,
            kind,
            name: self.name,
            balance: self.balance,
            annual_rate: self.annual_rate,
            payment: self.payment,
            extra_payment: self.extra_payment.unwrap_or(0.0),
            credit_limit: self.credit_limit,
        })
    }
}

/// Load and validate all debts from a CSV file
pub fn load_debts<P: AsRef<Path>>(path: P) -> Result<Vec<Debt>> {
    let reader = Reader::from_path(path)?;
    collect_debts(reader)
}

/// Load debts from any reader (e.g., request body, string buffer)
pub fn load_debts_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Debt>> {
    collect_debts(Reader::from_reader(reader))
}

fn collect_debts<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<Debt>> {
    let mut debts = Vec::new();

    for row in reader.deserialize() {
        let row: CsvRow = row?;
        debts.push(row.to_debt()?);
    }

    validate_debts(&debts)?;
    log::debug!("loaded {} debts", debts.len());
    Ok(debts)
}
