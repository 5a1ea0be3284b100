//! Display formatting for amounts, percentages, horizons and dates

use chrono::NaiveDate;

use crate::amortization::{round_cents, PayoffHorizon};

/// Currency display settings; no global state, pass one where needed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    /// Place the symbol after the amount ("1.234,56 €")
    pub symbol_after: bool,
    pub thousands_separator: char,
    pub decimal_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::us()
    }
}

impl CurrencyFormat {
    pub fn us() -> Self {
        Self {
            symbol: "$".to_string(),
            symbol_after: false,
            thousands_separator: ',',
            decimal_separator: '.',
        }
    }

    pub fn european(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            symbol_after: true,
            thousands_separator: '.',
            decimal_separator: ',',
        }
    }

    /// "$1,234.56", "-$12.00", "1.234,56 €"
    pub fn currency(&self, amount: f64) -> String {
        let cents = (round_cents(amount).abs() * 100.0).round() as u64;
        let number = format!(
            "{}{}{:02}",
            group_thousands(cents / 100, self.thousands_separator),
            self.decimal_separator,
            cents % 100
        );
        let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };

        if self.symbol_after {
            format!("{}{} {}", sign, number, self.symbol)
        } else {
            format!("{}{}{}", sign, self.symbol, number)
        }
    }

    /// "22.99%" with the locale's decimal separator
    pub fn percent(&self, value: f64, decimals: usize) -> String {
        let text = format!("{:.*}%", decimals, value);
        if self.decimal_separator == '.' {
            text
        } else {
            text.replace('.', &self.decimal_separator.to_string())
        }
    }
}

fn group_thousands(mut whole: u64, separator: char) -> String {
    let mut groups = Vec::new();
    loop {
        if whole < 1000 {
            groups.push(whole.to_string());
            break;
        }
        groups.push(format!("{:03}", whole % 1000));
        whole /= 1000;
    }
    groups.reverse();
    groups.join(&separator.to_string())
}

/// "3 years 2 months", "1 month", "Never"
pub fn horizon(months: PayoffHorizon) -> String {
    let total = match months {
        PayoffHorizon::Never => return "Never".to_string(),
        PayoffHorizon::Months(0) => return "Debt free".to_string(),
        PayoffHorizon::Months(m) => m,
    };

    let plural = |n: u32, unit: &str| {
        if n == 1 {
            format!("1 {}", unit)
        } else {
            format!("{} {}s", n, unit)
        }
    };

    match (total / 12, total % 12) {
        (0, m) => plural(m, "month"),
        (y, 0) => plural(y, "year"),
        (y, m) => format!("{} {}", plural(y, "year"), plural(m, "month")),
    }
}

/// "March 2027"
pub fn month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}
