use serde::{Deserialize, Serialize};

use super::defaults;

/// Currency formatting for report strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattingConfig {
    pub currency_symbol: String,
    pub decimals: usize,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            currency_symbol: defaults::DEFAULT_CURRENCY_SYMBOL.to_string(),
            decimals: defaults::DEFAULT_DECIMALS,
        }
    }
}
