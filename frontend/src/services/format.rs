use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::TransactionType;

/// Minus sign used in front of expense amounts
pub const MINUS_SIGN: char = '\u{2212}';

/// How currency amounts are written. Defaults to Brazilian real (pt-BR).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub thousands_separator: char,
    pub decimal_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "R$".to_string(),
            thousands_separator: '.',
            decimal_separator: ',',
        }
    }
}

impl CurrencyFormat {
    /// Format an amount, e.g. `R$ 1.234,56` or `-R$ 70,00`.
    ///
    /// Non-finite values are written as zero.
    pub fn format(&self, value: f64) -> String {
        let value = if value.is_finite() { value } else { 0.0 };
        let cents = (value.abs() * 100.0).round() as u64;
        let negative = value < 0.0 && cents > 0;

        let body = format!(
            "{} {}{}{:02}",
            self.symbol,
            group_thousands(cents / 100, self.thousands_separator),
            self.decimal_separator,
            cents % 100
        );

        if negative {
            format!("-{}", body)
        } else {
            body
        }
    }

    /// Amount prefixed with `+` for income and `−` for expenses
    pub fn format_signed(&self, amount: f64, kind: TransactionType) -> String {
        let sign = match kind {
            TransactionType::Income => '+',
            TransactionType::Expense => MINUS_SIGN,
        };
        format!("{} {}", sign, self.format(amount.abs()))
    }
}

fn group_thousands(units: u64, separator: char) -> String {
    let digits = units.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// `dd/mm/yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "January",
    }
}

/// Percentage with one decimal place, e.g. `42.5%`
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}
