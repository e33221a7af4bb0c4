//! Locale-style number formatting for report strings.
//!
//! Thousands are grouped with `,` and the fraction is separated by `.`,
//! e.g. `R$ 1,234,567.89`. Negative amounts keep the symbol first:
//! `R$ -5.00`.

use crate::config::FormattingConfig;

/// Format `value` with grouped thousands and a fixed number of decimals.
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 1);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // "-0.00" is not a useful figure in a report.
    let is_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Format a currency amount: `"{symbol} {grouped number}"`.
pub fn format_currency(value: f64, symbol: &str, decimals: usize) -> String {
    format!("{symbol} {}", format_number(value, decimals))
}

/// Format a percentage with a trailing `%`.
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{}%", format_number(value, decimals))
}

/// Formatter bound to one currency configuration.
#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    symbol: String,
    decimals: usize,
}

impl CurrencyFormatter {
    pub fn new(symbol: impl Into<String>, decimals: usize) -> Self {
        Self {
            symbol: symbol.into(),
            decimals,
        }
    }

    pub fn from_config(config: &FormattingConfig) -> Self {
        Self::new(config.currency_symbol.clone(), config.decimals)
    }

    pub fn currency(&self, value: f64) -> String {
        format_currency(value, &self.symbol, self.decimals)
    }

    /// Signed delta, e.g. `+ R$ 100,000.00`.
    pub fn currency_delta(&self, value: f64) -> String {
        let sign = if value < 0.0 { "-" } else { "+" };
        format!("{sign} {}", self.currency(value.abs()))
    }

    pub fn percent(&self, value: f64) -> String {
        format_percent(value, self.decimals)
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::from_config(&FormattingConfig::default())
    }
}
